/*!
Operator subcommands.

  serve.rs   ServeArgs + execute_serve   MCP stdio server (default)
  list.rs    ListArgs  + execute_list    print the tool catalog
  exec.rs    ExecArgs  + execute_exec    run one tool from the shell
  shared.rs  parameter parsing / coercion, schema summaries
  format.rs  table / box / color helpers for human output

Each subcommand module exposes one `execute_*` entry point returning
`anyhow::Result<()>`; argument structs derive `clap::Args`.
*/

pub mod exec;
pub mod format;
pub mod list;
pub mod serve;
pub mod shared;

pub use exec::{ExecArgs, execute_exec};
pub use list::{ListArgs, execute_list};
pub use serve::{ServeArgs, execute_serve};
