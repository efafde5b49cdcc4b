/*!
`serve.rs`

Implements `mmctl-mcp serve` (also the default when no subcommand is given):
runs the MCP server on stdin/stdout until the client disconnects. Nothing
but protocol frames may reach stdout from here on.
*/

use anyhow::Result;
use clap::Args;

use crate::mcp::MmctlServer;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

pub async fn execute_serve(_args: ServeArgs, server: MmctlServer) -> Result<()> {
    server.serve_stdio().await
}
