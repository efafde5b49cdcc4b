//! Plugin tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::tools::{Argv, CommandArgs, Invocation, ToolDefinition};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PluginListArgs {}

impl CommandArgs for PluginListArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["plugin", "list"]).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PluginEnableArgs {
    /// Plugin IDs to enable
    pub plugins: Vec<String>,
}

impl CommandArgs for PluginEnableArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["plugin", "enable"]).trailing(&self.plugins).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PluginDisableArgs {
    /// Plugin IDs to disable
    pub plugins: Vec<String>,
}

impl CommandArgs for PluginDisableArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["plugin", "disable"]).trailing(&self.plugins).finish())
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginMarketplaceListArgs {
    /// Filter plugins by ID, name or description
    pub filter: String,
    /// Page number to fetch
    pub page: i64,
    /// Number of plugins per page
    pub per_page: i64,
    /// Only list local plugins
    pub local_only: bool,
    /// Fetch all plugins
    pub all: bool,
}

impl CommandArgs for PluginMarketplaceListArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["plugin", "marketplace", "list"])
            .opt("--filter", &self.filter)
            .opt_int("--page", self.page)
            .opt_int("--per-page", self.per_page)
            .switch("--local-only", self.local_only)
            .switch("--all", self.all)
            .finish())
    }
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<PluginListArgs>("plugin_list", "List installed plugins"),
        ToolDefinition::new::<PluginEnableArgs>("plugin_enable", "Enable plugins"),
        ToolDefinition::new::<PluginDisableArgs>("plugin_disable", "Disable plugins"),
        ToolDefinition::new::<PluginMarketplaceListArgs>(
            "plugin_marketplace_list",
            "List marketplace plugins",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_appends_plugin_ids() {
        let args: PluginEnableArgs =
            serde_json::from_value(serde_json::json!({"plugins": ["com.a", "com.b"]})).unwrap();
        assert_eq!(args.build().unwrap().args, vec!["plugin", "enable", "com.a", "com.b"]);
    }

    #[test]
    fn marketplace_list_uses_nested_path() {
        let inv = PluginMarketplaceListArgs {
            filter: "jira".into(),
            per_page: 20,
            all: true,
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(
            inv.args,
            vec!["plugin", "marketplace", "list", "--filter", "jira", "--per-page", "20", "--all"]
        );
    }
}
