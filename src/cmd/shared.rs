/*!
shared.rs - helpers shared by the operator subcommands.

  parse_params / load_param_file   raw parameter collection
  build_arguments + coerce_value   schema-driven conversion to a JSON object
  param_summary                    "name:type" digest of a schema for tables
  find_definition                  case-insensitive tool lookup
*/

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result, bail};
use rmcp::model::JsonObject;
use serde_json::Value;

use crate::config::is_yaml;
use crate::tools::{ToolDefinition, ToolRegistry};

/// `KEY=VALUE` pairs; a later duplicate key wins.
pub fn parse_params(raw: &[String]) -> Result<BTreeMap<String, String>> {
    let mut provided = BTreeMap::new();
    for kv in raw {
        let Some((key, value)) = kv.split_once('=') else {
            bail!("invalid --param (expected KEY=VALUE): {kv}");
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("invalid --param (empty key): {kv}");
        }
        provided.insert(key.to_string(), value.trim().to_string());
    }
    Ok(provided)
}

/// Parameter file as a JSON object (YAML by extension, JSON otherwise).
/// Values keep their native types.
pub fn load_param_file(path: &Path) -> Result<JsonObject> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read param file: {}", path.display()))?;

    let value: Value = if is_yaml(path) {
        serde_yaml::from_str(&raw).context("failed to parse YAML param file")?
    } else {
        serde_json::from_str(&raw).context("failed to parse JSON param file")?
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(JsonObject::new()),
        _ => bail!("param file root must be an object"),
    }
}

/// Merge `base` (param file) with `provided` (CLI strings, coerced by the
/// declared property type). CLI entries override file entries. Unknown keys
/// and missing required properties are rejected.
pub fn build_arguments(
    schema: &JsonObject,
    base: JsonObject,
    provided: &BTreeMap<String, String>,
) -> Result<JsonObject> {
    let props = schema
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    let required: BTreeSet<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut result = base;
    for (key, raw) in provided {
        result.insert(key.clone(), coerce_value(raw, property_type(props.get(key))));
    }

    if let Some(unknown) = result.keys().find(|k| !props.contains_key(*k)) {
        bail!("unknown parameter: {unknown}");
    }
    if let Some(missing) = required.iter().find(|r| !result.contains_key(**r)) {
        bail!("missing required parameter: {missing}");
    }
    Ok(result)
}

fn property_type(prop: Option<&Value>) -> &str {
    prop.and_then(|p| p.get("type"))
        .and_then(Value::as_str)
        .unwrap_or("string")
}

/// Coerce a raw string by primitive type hint; unparseable input stays a string.
pub fn coerce_value(raw: &str, type_hint: &str) -> Value {
    match type_hint {
        "integer" => raw
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(raw.to_string())),
        "number" => raw
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(raw.to_string())),
        "boolean" => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "y" => Value::Bool(true),
            "false" | "0" | "no" | "n" => Value::Bool(false),
            _ => Value::String(raw.to_string()),
        },
        "array" if raw.trim().is_empty() => Value::Array(Vec::new()),
        "array" => Value::Array(
            raw.split(',')
                .map(|s| Value::String(s.trim().to_string()))
                .collect(),
        ),
        _ => Value::String(raw.to_string()),
    }
}

/// `name:type` for each property, required ones marked with `*`.
pub fn param_summary(schema: &JsonObject) -> Vec<String> {
    let required: BTreeSet<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|props| {
            props
                .iter()
                .map(|(name, prop)| {
                    let mark = if required.contains(name.as_str()) { "*" } else { "" };
                    format!("{name}{mark}:{}", property_type(Some(prop)))
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn find_definition<'a>(registry: &'a ToolRegistry, name: &str) -> Option<&'a ToolDefinition> {
    registry
        .get(name)
        .or_else(|| registry.iter().find(|d| d.name().eq_ignore_ascii_case(name)))
}
