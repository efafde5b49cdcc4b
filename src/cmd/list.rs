/*!
`list.rs`

Implements `mmctl-mcp list`: prints the built-in tool catalog without
starting the MCP transport or touching mmctl.

JSON Output Shape:
{
  "status": "ok",
  "count": 63,
  "tools": [
    { "name": "bot_create", "description": "...", "params": ["username*:string", ...],
      "success_message": "Bot created successfully" }
  ]
}
*/

use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::cmd::format::{Role, StyleOptions, TableOpts, box_header, color, emoji, table};
use crate::cmd::shared::param_summary;
use crate::config::ServerConfig;
use crate::tools::ToolRegistry;

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Output JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn execute_list(args: ListArgs, registry: &ToolRegistry, config: &ServerConfig) -> Result<()> {
    let out = if args.json {
        render_json(registry)?
    } else {
        render_table(registry, config, &StyleOptions::detect())
    };
    println!("{out}");
    Ok(())
}

fn render_json(registry: &ToolRegistry) -> Result<String> {
    let tools: Vec<_> = registry
        .iter()
        .map(|d| {
            json!({
                "name": d.name(),
                "description": d.description(),
                "params": param_summary(d.schema()),
                "success_message": d.success_message(),
            })
        })
        .collect();
    let doc = json!({
        "status": "ok",
        "count": registry.len(),
        "tools": tools,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn render_table(registry: &ToolRegistry, config: &ServerConfig, style: &StyleOptions) -> String {
    let header = box_header(
        format!("{} Tools ({})", emoji("list", style), registry.len()),
        Some(format!("{} {}", config.program, config.mode_flag)),
        style,
    );

    if registry.is_empty() {
        return format!("{header}\n{}", color(Role::Dim, "(none)", style));
    }

    let rows: Vec<Vec<String>> = registry
        .iter()
        .enumerate()
        .map(|(idx, d)| {
            let params = param_summary(d.schema());
            let params = if params.is_empty() {
                "-".to_string()
            } else {
                params.join(", ")
            };
            vec![
                (idx + 1).to_string(),
                d.name().to_string(),
                params,
                d.description().to_string(),
            ]
        })
        .collect();

    let tbl = table(
        &["#", "NAME", "PARAMS", "DESCRIPTION"],
        &rows,
        TableOpts {
            max_width: style.term_width,
            ..Default::default()
        },
        style,
    );
    let hint = color(
        Role::Dim,
        "Run a tool with `mmctl-mcp exec <name> --param key=value`; * marks required params",
        style,
    );
    format!("{header}\n{tbl}\n\n{} {hint}", emoji("info", style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::catalog::builtin_registry;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        cmd: TestSub,
    }

    #[derive(clap::Subcommand, Debug)]
    enum TestSub {
        List(ListArgs),
    }

    #[test]
    fn clap_parses_list_json() {
        let cli = TestCli::try_parse_from(["t", "list", "--json"]).unwrap();
        let TestSub::List(args) = cli.cmd;
        assert!(args.json);
    }

    #[test]
    fn json_lists_every_tool() {
        let registry = builtin_registry().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&render_json(&registry).unwrap()).unwrap();
        assert_eq!(doc["count"], registry.len());
        let first = &doc["tools"][0];
        assert_eq!(first["name"], "auth_current");
        assert_eq!(first["success_message"], "Current auth credentials retrieved successfully");
        assert_eq!(doc["tools"].as_array().unwrap().len(), registry.len());
    }

    #[test]
    fn table_has_header_and_rows() {
        let registry = builtin_registry().unwrap();
        let out = render_table(&registry, &ServerConfig::default(), &StyleOptions::plain(200));
        assert!(out.contains(&format!("Tools ({})", registry.len())));
        assert!(out.contains("mmctl --local"));
        assert!(out.contains("channel_create"));
        assert!(out.contains("team*:string"));
    }

    #[test]
    fn empty_registry_renders_placeholder() {
        let out = render_table(&ToolRegistry::new(), &ServerConfig::default(), &StyleOptions::plain(80));
        assert!(out.contains("(none)"));
    }
}
