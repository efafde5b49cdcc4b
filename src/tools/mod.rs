/*!
Tool registry and command bridge.

Layout:
  argv.rs        Argv builder + Invocation (flag/positional conventions)
  definition.rs  ToolDefinition (name, description, schema, builder)
  registry.rs    ToolRegistry (register / lookup / dispatch)
  response.rs    ToolResponse + outcome formatting
  catalog/       the declarative mmctl tool catalog

Pipeline per call: registry lookup -> record deserialize -> argv build ->
`Executor::execute` -> `format_outcome`.
*/

pub mod argv;
pub mod catalog;
pub mod definition;
pub mod registry;
pub mod response;

pub use argv::{Argv, Invocation};
pub use definition::{CommandArgs, ToolDefinition};
pub use registry::ToolRegistry;
pub use response::ToolResponse;

use thiserror::Error;

/// Registry / dispatch failures. Execution failures are not in here: they
/// end up as response text (see `response::format_outcome`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("tool '{0}' is already registered")]
    DuplicateName(String),
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid arguments for '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },
}
