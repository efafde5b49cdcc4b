//! Raw passthrough, system status, and server configuration tools.

use anyhow::bail;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::tools::{Argv, CommandArgs, Invocation, ToolDefinition};

/// Free-form mmctl command line.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MmctlArgs {
    /// The mmctl command to run (e.g. 'user list', 'team list')
    pub command: String,
}

impl CommandArgs for MmctlArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        let mut tokens = self.command.split_whitespace().peekable();
        if tokens.peek().is_none() {
            bail!("command is empty");
        }
        Ok(Invocation::from_args(tokens))
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SystemInfoArgs {
    /// Whether to include detailed information
    pub detail: bool,
}

impl CommandArgs for SystemInfoArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        let sub = if self.detail { "status" } else { "version" };
        Ok(Argv::command(["system", sub]).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConfigGetArgs {
    /// Configuration setting path in dot notation (e.g., 'SqlSettings.DriverName')
    pub path: String,
}

impl CommandArgs for ConfigGetArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["config", "get"]).arg(&self.path).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConfigSetArgs {
    /// Configuration setting path in dot notation (e.g., 'SqlSettings.DriverName')
    pub path: String,
    /// Value(s) to set for the configuration setting
    pub values: Vec<String>,
}

impl CommandArgs for ConfigSetArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["config", "set"])
            .arg(&self.path)
            .trailing(&self.values)
            .finish())
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ConfigShowArgs {}

impl CommandArgs for ConfigShowArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["config", "show"]).finish())
    }
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<MmctlArgs>("mmctl", "Run any mmctl command with --local mode"),
        ToolDefinition::new::<SystemInfoArgs>(
            "system_info",
            "Get Mattermost system version information",
        ),
        ToolDefinition::new::<ConfigGetArgs>("config_get", "Get a configuration setting"),
        ToolDefinition::new::<ConfigSetArgs>("config_set", "Set a configuration setting"),
        ToolDefinition::new::<ConfigShowArgs>("config_show", "Show the server configuration"),
    ]
}
