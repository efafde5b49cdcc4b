/*!
`exec.rs`

Implements `mmctl-mcp exec <TOOL>`: one call through the same registry,
executor and response formatting the MCP server uses, driven from the shell.

Parameters:
  --param KEY=VALUE      repeatable; coerced by the tool schema
                         (integer / number / boolean / comma-split array)
  --param-file PATH      JSON or YAML object; --param entries override it

JSON Output:
{
  "status": "ok" | "error",
  "tool": "team_list",
  "elapsed_ms": 42,
  "arguments": { ... },
  "text": "..."
}

The process exits non-zero whenever the response is an error.
*/

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Args;
use rmcp::model::JsonObject;
use serde_json::json;

use crate::cmd::format::{Role, StyleOptions, box_header, color, emoji};
use crate::cmd::shared::{build_arguments, find_definition, load_param_file, parse_params};
use crate::runner::Executor;
use crate::tools::{ToolRegistry, ToolResponse};

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Tool name to invoke
    #[arg(value_name = "TOOL")]
    pub tool: String,

    /// Provide parameter (KEY=VALUE), repeatable
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Load parameters from file (JSON or YAML). CLI --param overrides file entries
    #[arg(long = "param-file", value_name = "PATH")]
    pub param_file: Option<PathBuf>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome of one `exec`, before rendering.
#[derive(Debug)]
struct ExecReport {
    tool: String,
    arguments: JsonObject,
    response: ToolResponse,
    elapsed_ms: u64,
}

pub async fn execute_exec(
    args: ExecArgs,
    registry: &ToolRegistry,
    executor: &Executor,
) -> Result<()> {
    let report = run(&args, registry, executor).await;
    let report = match report {
        Ok(report) => report,
        Err(e) => return output_error(args.json, &format!("{e:#}")),
    };

    let style = StyleOptions::detect();
    let out = if args.json {
        render_json(&report)?
    } else {
        render_human(&report, &style)
    };
    println!("{out}");

    if report.response.is_error {
        bail!("tool '{}' failed", report.tool);
    }
    Ok(())
}

async fn run(args: &ExecArgs, registry: &ToolRegistry, executor: &Executor) -> Result<ExecReport> {
    let name = args.tool.trim();
    if name.is_empty() {
        bail!("tool name cannot be empty");
    }
    let definition =
        find_definition(registry, name).with_context(|| format!("tool '{name}' not found"))?;

    let provided = parse_params(&args.params)?;
    let base = match &args.param_file {
        Some(path) => load_param_file(path)?,
        None => JsonObject::new(),
    };
    let arguments = build_arguments(definition.schema(), base, &provided)
        .with_context(|| format!("invalid parameters for '{}'", definition.name()))?;

    let started = Instant::now();
    let response = registry
        .dispatch(definition.name(), arguments.clone(), executor)
        .await?;

    Ok(ExecReport {
        tool: definition.name().to_string(),
        arguments,
        response,
        elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    })
}

fn render_json(report: &ExecReport) -> Result<String> {
    let doc = json!({
        "status": if report.response.is_error { "error" } else { "ok" },
        "tool": report.tool,
        "elapsed_ms": report.elapsed_ms,
        "arguments": report.arguments,
        "text": report.response.text,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn render_human(report: &ExecReport, style: &StyleOptions) -> String {
    let (tag, role, label) = if report.response.is_error {
        ("error", Role::Error, "Exec Failed")
    } else {
        ("success", Role::Success, "Exec Success")
    };
    let header = box_header(
        format!("{} {label} ({})", emoji(tag, style), report.tool),
        Some(format!("{} ms", report.elapsed_ms)),
        style,
    );
    let body = if report.response.is_error {
        color(role, &report.response.text, style)
    } else {
        report.response.text.clone()
    };
    format!("{header}\n{}", body.trim_end())
}

fn output_error(json: bool, msg: &str) -> Result<()> {
    if json {
        let err = json!({"status": "error", "error": msg});
        println!(
            "{}",
            serde_json::to_string_pretty(&err).unwrap_or_else(|_| err.to_string())
        );
    } else {
        let style = StyleOptions::detect();
        let title = format!("{} Exec Error", emoji("error", &style));
        println!("{}", box_header(title, Some(color(Role::Error, msg, &style)), &style));
    }
    bail!(msg.to_string())
}
