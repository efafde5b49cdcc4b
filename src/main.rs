use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod cmd;
mod config;
mod mcp;
mod runner;
mod tools;
mod utils;

use cmd::{ExecArgs, ListArgs, ServeArgs};
use config::{Overrides, ServerConfig};
use mcp::MmctlServer;

/// mmctl-mcp - Mattermost mmctl exposed as MCP tools
///
/// Command layout:
///   mmctl-mcp [serve]                          MCP server on stdio (default)
///   mmctl-mcp list [--json]                    print the tool catalog
///   mmctl-mcp exec <TOOL> [--param k=v ...]    run one tool from the shell
///
/// Global flags / env:
///   -v / -vv               Increase verbosity (logs go to stderr)
///   -q / --quiet           Errors only
///   --config PATH          JSON or YAML server config
///   --mmctl PATH           mmctl binary (or MMCTL_PATH env)
///   --structured-errors    Mark failed calls with the MCP isError flag
///   RUST_LOG               Overrides the -v / -q level when set
///
/// Examples:
///   mmctl-mcp
///   mmctl-mcp list --json
///   mmctl-mcp exec channel_create --param team=core --param name=ops --param displayName=Ops
///   mmctl-mcp --mmctl /opt/mattermost/bin/mmctl exec mmctl --param "command=user list"
#[derive(Parser, Debug)]
#[command(
    name = "mmctl-mcp",
    version,
    about = "MCP server exposing the Mattermost mmctl admin CLI as typed tools",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Server configuration file (JSON, or YAML for .yaml/.yml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<std::path::PathBuf>,

    /// mmctl binary to run (falls back to MMCTL_PATH, then "mmctl")
    #[arg(long = "mmctl", global = true, value_name = "PATH")]
    mmctl: Option<String>,

    /// Report failed calls with the MCP isError flag set
    #[arg(long, global = true)]
    structured_errors: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server over stdio
    Serve(ServeArgs),

    /// List the available tools
    List(ListArgs),

    /// Execute (invoke) a tool
    Exec(ExecArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    let config = ServerConfig::resolve(&Overrides {
        config_file: cli.config.as_deref(),
        program: cli.mmctl.as_deref(),
        structured_errors: cli.structured_errors,
    })?;
    let server = MmctlServer::from_config(&config)?;

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Serve(ServeArgs::default()));

    match command {
        Commands::List(args) => cmd::execute_list(args, server.registry(), &config),
        Commands::Serve(args) => runtime()?.block_on(cmd::execute_serve(args, server)),
        Commands::Exec(args) => {
            runtime()?.block_on(cmd::execute_exec(args, server.registry(), server.executor()))
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")
}
