//! Tool definitions.
//!
//! A definition is data: name, description, an optional canned success
//! message, the JSON Schema of its argument record, and a type-erased builder
//! that turns raw JSON arguments into an `Invocation`.

use std::fmt;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde::de::DeserializeOwned;

use super::ToolError;
use super::argv::Invocation;

/// Typed argument record of one tool.
pub trait CommandArgs: DeserializeOwned + JsonSchema {
    fn build(&self) -> anyhow::Result<Invocation>;
}

type BuildFn = dyn Fn(JsonObject) -> Result<Invocation, String> + Send + Sync;

pub struct ToolDefinition {
    name: &'static str,
    description: &'static str,
    success_message: Option<&'static str>,
    schema: Arc<JsonObject>,
    build: Box<BuildFn>,
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("success_message", &self.success_message)
            .finish_non_exhaustive()
    }
}

impl ToolDefinition {
    pub fn new<A>(name: &'static str, description: &'static str) -> Self
    where
        A: CommandArgs + 'static,
    {
        Self {
            name,
            description,
            success_message: None,
            schema: Arc::new(schema_object::<A>()),
            build: Box::new(|mut raw: JsonObject| {
                // null means unset: optional fields fall back to their defaults
                raw.retain(|_, value| !value.is_null());
                let record: A = serde_json::from_value(serde_json::Value::Object(raw))
                    .map_err(|e| e.to_string())?;
                record.build().map_err(|e| format!("{e:#}"))
            }),
        }
    }

    /// Text returned instead of empty output on success.
    pub fn with_success_message(mut self, message: &'static str) -> Self {
        self.success_message = Some(message);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn success_message(&self) -> Option<&'static str> {
        self.success_message
    }

    pub fn schema(&self) -> &JsonObject {
        &self.schema
    }

    /// Deserialize `arguments` into the record and build its argv.
    pub fn build(&self, arguments: JsonObject) -> Result<Invocation, ToolError> {
        (self.build)(arguments).map_err(|reason| ToolError::InvalidArguments {
            tool: self.name.to_string(),
            reason,
        })
    }

    /// Discovery view for the MCP transport.
    pub fn to_tool(&self) -> Tool {
        Tool::new(self.name, self.description, self.schema.clone())
    }
}

/// Root object schema for `A`, without the `$schema` marker. Subschemas are
/// inlined so shared records behind newtypes still expose `properties`.
fn schema_object<A: JsonSchema>() -> JsonObject {
    let generator = SchemaSettings::draft2020_12()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator();
    let mut object = match serde_json::to_value(generator.into_root_schema_for::<A>()) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => JsonObject::new(),
    };
    object.remove("$schema");
    object
        .entry("type")
        .or_insert_with(|| serde_json::Value::String("object".into()));
    object
}
