//! Name -> definition map.
//!
//! Built once at startup, then shared read-only (`Arc<ToolRegistry>`) by every
//! concurrent call. There is no removal or override: a second definition with
//! the same name is rejected.

use std::collections::BTreeMap;

use rmcp::model::JsonObject;

use super::ToolError;
use super::definition::ToolDefinition;
use super::response::{ToolResponse, format_outcome};
use crate::runner::Executor;

#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, ToolDefinition>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: ToolDefinition) -> Result<(), ToolError> {
        let name = definition.name();
        if self.tools.contains_key(name) {
            return Err(ToolError::DuplicateName(name.to_string()));
        }
        self.tools.insert(name, definition);
        Ok(())
    }

    /// Register a whole family, stopping at the first duplicate.
    pub fn register_all(
        &mut self,
        definitions: impl IntoIterator<Item = ToolDefinition>,
    ) -> Result<(), ToolError> {
        for definition in definitions {
            self.register(definition)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    /// Resolve `name`, build its argv from `arguments`, execute, format.
    ///
    /// Unknown names and undeserializable arguments fail before any process
    /// is started. Execution failures are not errors here: they come back as
    /// an error-marked `ToolResponse`.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: JsonObject,
        executor: &Executor,
    ) -> Result<ToolResponse, ToolError> {
        let definition = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let invocation = definition.build(arguments)?;
        tracing::debug!(tool = name, "dispatching");

        let outcome = executor.execute(invocation).await;
        if let Err(err) = &outcome {
            tracing::warn!(tool = name, error = %err, "mmctl call failed");
        }
        Ok(format_outcome(outcome, definition.success_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ExecutionResult;
    use crate::runner::testing::{FakeRunner, executor_with};
    use crate::tools::argv::{Argv, Invocation};
    use crate::tools::definition::CommandArgs;
    use schemars::JsonSchema;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct NoArgs {}

    impl CommandArgs for NoArgs {
        fn build(&self) -> anyhow::Result<Invocation> {
            Ok(Argv::command(["team", "list"]).finish())
        }
    }

    #[derive(Debug, Deserialize, JsonSchema)]
    struct NamedArgs {
        name: String,
    }

    impl CommandArgs for NamedArgs {
        fn build(&self) -> anyhow::Result<Invocation> {
            Ok(Argv::command(["bot", "create"]).arg(&self.name).finish())
        }
    }

    fn registry() -> ToolRegistry {
        let mut reg = ToolRegistry::new();
        reg.register(ToolDefinition::new::<NoArgs>("team_list", "List teams"))
            .unwrap();
        reg.register(
            ToolDefinition::new::<NamedArgs>("bot_create", "Create a bot")
                .with_success_message("Bot created successfully"),
        )
        .unwrap();
        reg
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut reg = registry();
        let err = reg
            .register(ToolDefinition::new::<NoArgs>("team_list", "Again"))
            .unwrap_err();
        assert_eq!(err, ToolError::DuplicateName("team_list".into()));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("team_list").unwrap().description(), "List teams");
    }

    #[test]
    fn iteration_is_name_ordered_regardless_of_registration_order() {
        let names: Vec<_> = registry().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["bot_create", "team_list"]);
    }

    #[tokio::test]
    async fn unknown_tool_never_runs_a_process() {
        let runner = FakeRunner::replying(ExecutionResult::success("x"));
        let exec = executor_with(runner.clone());
        let err = registry()
            .dispatch("nope", JsonObject::new(), &exec)
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::UnknownTool("nope".into()));
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn invalid_arguments_never_run_a_process() {
        let runner = FakeRunner::replying(ExecutionResult::success("x"));
        let exec = executor_with(runner.clone());
        let err = registry()
            .dispatch("bot_create", JsonObject::new(), &exec)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_output_yields_canned_message() {
        let runner = FakeRunner::replying(ExecutionResult::success(""));
        let exec = executor_with(runner.clone());
        let args = json!({"name": "helper"}).as_object().cloned().unwrap();
        let resp = registry().dispatch("bot_create", args, &exec).await.unwrap();
        assert_eq!(resp.text, "Bot created successfully");
        assert_eq!(
            runner.calls()[0].argv(),
            vec!["--local", "bot", "create", "helper"]
        );
    }

    #[tokio::test]
    async fn failure_is_reported_as_text() {
        let runner = FakeRunner::replying(ExecutionResult::failure(Some(1), "no such user"));
        let exec = executor_with(runner);
        let resp = registry()
            .dispatch("team_list", JsonObject::new(), &exec)
            .await
            .unwrap();
        assert!(resp.is_error);
        assert!(resp.text.starts_with("Error: "));
        assert!(resp.text.contains("no such user"));
    }

    #[tokio::test]
    async fn launch_failure_is_reported_as_text() {
        let exec = executor_with(FakeRunner::unlaunchable());
        let resp = registry()
            .dispatch("team_list", JsonObject::new(), &exec)
            .await
            .unwrap();
        assert!(resp.is_error);
        assert!(resp.text.contains("not found"));
    }
}
