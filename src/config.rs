//! Server configuration.
//!
//! Sources, highest precedence first: CLI flags, `MMCTL_PATH`, the file given
//! with `--config` (JSON, or YAML for `.yaml`/`.yml`), then built-in defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming the mmctl binary.
pub const PROGRAM_ENV: &str = "MMCTL_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// mmctl binary, looked up on PATH unless absolute.
    #[serde(default = "default_program")]
    pub program: String,

    /// Leading flag on every invocation. Empty disables it.
    #[serde(default = "default_mode_flag")]
    pub mode_flag: String,

    /// Report failed calls with the MCP `isError` flag set.
    #[serde(default)]
    pub structured_errors: bool,
}

fn default_program() -> String {
    "mmctl".to_string()
}

fn default_mode_flag() -> String {
    "--local".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            mode_flag: default_mode_flag(),
            structured_errors: false,
        }
    }
}

/// Values taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub config_file: Option<&'a Path>,
    pub program: Option<&'a str>,
    pub structured_errors: bool,
}

impl ServerConfig {
    /// Load from a file; the format follows the extension.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        if is_yaml(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config from {}", path.display()))
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config from {}", path.display()))
        }
    }

    /// Apply every source in precedence order.
    pub fn resolve(overrides: &Overrides<'_>) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        overrides: &Overrides<'_>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = match overrides.config_file {
            Some(path) => Self::load_from(path)?,
            None => Self::default(),
        };

        if let Some(program) = env(PROGRAM_ENV).filter(|v| !v.trim().is_empty()) {
            config.program = program;
        }
        if let Some(program) = overrides.program.filter(|v| !v.trim().is_empty()) {
            config.program = program.to_string();
        }
        if overrides.structured_errors {
            config.structured_errors = true;
        }

        tracing::debug!(
            program = %config.program,
            mode_flag = %config.mode_flag,
            structured_errors = config.structured_errors,
            "configuration resolved"
        );
        Ok(config)
    }
}

pub(crate) fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}
