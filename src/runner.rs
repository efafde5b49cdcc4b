//! Command execution for the external admin binary.
//!
//! Every call becomes `program <mode flag> [context flags] <subcommand tokens>`
//! and is started directly with an argument array (never through a shell).
//! stdout and stderr are captured and returned as one string. There are no
//! retries and no timeout: long-running commands such as an LDAP sync are
//! allowed to finish.

use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

use crate::tools::Invocation;

/// Fully resolved process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub program: String,
    pub prefix: Vec<String>,
    pub args: Vec<String>,
}

impl ExecutionRequest {
    /// Arguments handed to the process, in order.
    pub fn argv(&self) -> Vec<String> {
        self.prefix.iter().chain(self.args.iter()).cloned().collect()
    }
}

/// What the process left behind once it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_succeeded: bool,
    pub exit_code: Option<i32>,
    pub combined_output: String,
}

impl ExecutionResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            exit_succeeded: true,
            exit_code: Some(0),
            combined_output: output.into(),
        }
    }

    pub fn failure(code: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            exit_succeeded: false,
            exit_code: code,
            combined_output: output.into(),
        }
    }

    /// Classify: zero exit yields the output verbatim, anything else an error
    /// carrying both the exit cause and the output.
    pub fn into_output(self, program: &str) -> Result<String, ExecutionError> {
        if self.exit_succeeded {
            Ok(self.combined_output)
        } else {
            Err(ExecutionError::Failed {
                program: program.to_string(),
                code: self.exit_code,
                output: self.combined_output,
            })
        }
    }
}

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("error executing {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("error executing {program}: {}\nOutput: {output}", describe_exit(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        output: String,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit status {c}"),
        None => "terminated by signal".to_string(),
    }
}

/// Seam between the bridge and the operating system.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run to completion. `Err` only when the process could not be started.
    async fn run(&self, request: &ExecutionRequest) -> Result<ExecutionResult, ExecutionError>;
}

/// Spawns real processes through tokio.
///
/// The two streams are captured separately and returned as all of stdout
/// followed by all of stderr; their interleaving in time is not preserved.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, request: &ExecutionRequest) -> Result<ExecutionResult, ExecutionError> {
        // Stdin is closed so the child can never read the MCP stream.
        let output = Command::new(&request.program)
            .args(request.argv())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ExecutionError::Launch {
                program: request.program.clone(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(if output.status.success() {
            ExecutionResult::success(combined)
        } else {
            ExecutionResult::failure(output.status.code(), combined)
        })
    }
}

/// Program + mode flag, fixed once per process, bound to a runner.
#[derive(Clone)]
pub struct Executor {
    program: String,
    mode_flag: String,
    runner: Arc<dyn CommandRunner>,
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("program", &self.program)
            .field("mode_flag", &self.mode_flag)
            .finish_non_exhaustive()
    }
}

impl Executor {
    pub fn new(
        program: impl Into<String>,
        mode_flag: impl Into<String>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            program: program.into(),
            mode_flag: mode_flag.into(),
            runner,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Mode flag first, then the invocation context, then subcommand tokens.
    pub fn request(&self, invocation: Invocation) -> ExecutionRequest {
        let mut prefix = Vec::with_capacity(1 + invocation.context.len());
        if !self.mode_flag.is_empty() {
            prefix.push(self.mode_flag.clone());
        }
        prefix.extend(invocation.context);
        ExecutionRequest {
            program: self.program.clone(),
            prefix,
            args: invocation.args,
        }
    }

    pub async fn execute(&self, invocation: Invocation) -> Result<String, ExecutionError> {
        let request = self.request(invocation);
        tracing::trace!(program = %request.program, argv = ?request.argv(), "spawning");
        let result = self.runner.run(&request).await?;
        result.into_output(&request.program)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn request_orders_mode_then_context_then_args() {
        let exec = executor_with(FakeRunner::replying(ExecutionResult::success("")));
        let req = exec.request(Invocation {
            context: vec!["--local-user-id".into(), "u1".into()],
            args: vec!["post".into(), "create".into()],
        });
        assert_eq!(req.program, "mmctl");
        assert_eq!(
            req.argv(),
            vec!["--local", "--local-user-id", "u1", "post", "create"]
        );
    }

    #[test]
    fn empty_mode_flag_is_not_emitted() {
        let exec = Executor::new("mmctl", "", FakeRunner::replying(ExecutionResult::success("")));
        let req = exec.request(Invocation::from_args(["team", "list"]));
        assert_eq!(req.argv(), vec!["team", "list"]);
    }

    #[test]
    fn failure_keeps_cause_and_output() {
        let err = ExecutionResult::failure(Some(1), "no such user\n")
            .into_output("mmctl")
            .unwrap_err();
        let text = err.to_string();
        assert!(text.contains("exit status 1"));
        assert!(text.ends_with("\nOutput: no such user\n"));
    }

    #[test]
    fn success_output_is_verbatim() {
        let out = ExecutionResult::success("  spaced\n\n").into_output("mmctl").unwrap();
        assert_eq!(out, "  spaced\n\n");
    }

    #[tokio::test]
    async fn execute_passes_through_runner() {
        let runner = FakeRunner::replying(ExecutionResult::success("v9.0"));
        let exec = executor_with(runner.clone());
        let out = exec
            .execute(Invocation::from_args(["system", "version"]))
            .await
            .unwrap();
        assert_eq!(out, "v9.0");
        assert_eq!(runner.calls().len(), 1);
        assert_eq!(runner.calls()[0].argv(), vec!["--local", "system", "version"]);
    }

    #[tokio::test]
    async fn launch_failure_is_reported() {
        let exec = Executor::new("definitely-not-a-real-binary-4242", "--local", Arc::new(ProcessRunner));
        let err = exec
            .execute(Invocation::from_args(["team", "list"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ExecutionError::Launch { .. }));
        assert!(err.to_string().starts_with("error executing definitely-not-a-real-binary-4242"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn process_runner_combines_streams_and_exit_status() {
        let exec = Executor::new("sh", "-c", Arc::new(ProcessRunner));
        let out = exec
            .execute(Invocation::from_args(["printf err >&2; printf out"]))
            .await
            .unwrap();
        assert_eq!(out, "outerr");

        let err = exec
            .execute(Invocation::from_args(["printf 'no such user' >&2; exit 3"]))
            .await
            .unwrap_err();
        assert!(err.to_string().ends_with("Output: no such user"));
        assert!(err.to_string().contains("exit status 3"));
    }
}
