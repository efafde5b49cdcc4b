//! Uniform response text.
//!
//! Success returns the output untouched, or the tool's canned message when
//! the output is empty. Failure becomes text prefixed with `Error: `; the
//! `is_error` flag is kept alongside for callers that branch on it.

use rmcp::model::{CallToolResult, Content};

use crate::runner::ExecutionError;

pub const ERROR_MARKER: &str = "Error: ";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    pub text: String,
    pub is_error: bool,
}

impl ToolResponse {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(description: impl std::fmt::Display) -> Self {
        Self {
            text: format!("{ERROR_MARKER}{description}"),
            is_error: true,
        }
    }

    /// MCP result. With `structured` unset, failures still travel as a plain
    /// successful text result.
    pub fn into_call_result(self, structured: bool) -> CallToolResult {
        let content = vec![Content::text(self.text)];
        if structured && self.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

pub fn format_outcome(
    outcome: Result<String, ExecutionError>,
    success_message: Option<&str>,
) -> ToolResponse {
    match outcome {
        Ok(output) if output.is_empty() => {
            ToolResponse::ok(success_message.unwrap_or(DEFAULT_SUCCESS_MESSAGE))
        }
        Ok(output) => ToolResponse::ok(output),
        Err(err) => ToolResponse::error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(output: &str) -> ExecutionError {
        ExecutionError::Failed {
            program: "mmctl".into(),
            code: Some(1),
            output: output.into(),
        }
    }

    #[test]
    fn non_empty_output_is_unmodified() {
        let r = format_outcome(Ok("id: abc\n".into()), Some("Bot created successfully"));
        assert_eq!(r, ToolResponse::ok("id: abc\n"));
    }

    #[test]
    fn empty_output_uses_declared_message() {
        let r = format_outcome(Ok(String::new()), Some("Bot created successfully"));
        assert_eq!(r.text, "Bot created successfully");
        assert!(!r.is_error);
    }

    #[test]
    fn empty_output_without_message_uses_default() {
        let r = format_outcome(Ok(String::new()), None);
        assert_eq!(r.text, DEFAULT_SUCCESS_MESSAGE);
    }

    #[test]
    fn failure_carries_marker_and_output() {
        let r = format_outcome(Err(failed("no such user")), Some("ignored"));
        assert!(r.is_error);
        assert!(r.text.starts_with(ERROR_MARKER));
        assert!(r.text.contains("no such user"));
        assert!(r.text.contains("exit status 1"));
    }

    #[test]
    fn call_result_error_flag_follows_mode() {
        let plain = ToolResponse::error("boom").into_call_result(false);
        assert_ne!(plain.is_error, Some(true));

        let structured = ToolResponse::error("boom").into_call_result(true);
        assert_eq!(structured.is_error, Some(true));

        let ok = ToolResponse::ok("fine").into_call_result(true);
        assert_ne!(ok.is_error, Some(true));
    }
}
