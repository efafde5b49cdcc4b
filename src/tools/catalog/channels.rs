//! Channel tools.
//!
//! Named channels are addressed as `team:channel`.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::tools::{Argv, CommandArgs, Invocation, ToolDefinition};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ChannelListArgs {
    /// Team name or ID to filter channels by
    pub team: String,
}

impl CommandArgs for ChannelListArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["channel", "list"]).opt_arg(&self.team).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChannelCreateArgs {
    /// Team name or ID
    pub team: String,
    /// Channel name (lowercase, no spaces)
    pub name: String,
    /// Channel display name
    pub display_name: String,
    /// Channel header
    #[serde(default)]
    pub header: String,
    /// Channel purpose
    #[serde(default)]
    pub purpose: String,
    /// Create a private channel
    #[serde(default)]
    pub private: bool,
}

impl CommandArgs for ChannelCreateArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["channel", "create"])
            .flag("--team", &self.team)
            .flag("--name", &self.name)
            .flag("--display-name", &self.display_name)
            .opt("--header", &self.header)
            .opt("--purpose", &self.purpose)
            .switch("--private", self.private)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChannelSearchArgs {
    /// Team name or ID to search in
    #[serde(default)]
    pub team: String,
    /// Channel name to search for
    pub channel: String,
}

impl CommandArgs for ChannelSearchArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["channel", "search"])
            .opt("--team", &self.team)
            .arg(&self.channel)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChannelArchiveArgs {
    /// Channel name or ID to archive (in team:channel format for named channels)
    pub channel: String,
}

impl CommandArgs for ChannelArchiveArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["channel", "archive"]).arg(&self.channel).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChannelUnarchiveArgs {
    /// Channel name or ID to unarchive (in team:channel format for named channels)
    pub channel: String,
}

impl CommandArgs for ChannelUnarchiveArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["channel", "unarchive"]).arg(&self.channel).finish())
    }
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<ChannelListArgs>("channel_list", "List channels in a team"),
        ToolDefinition::new::<ChannelCreateArgs>("channel_create", "Create a new channel"),
        ToolDefinition::new::<ChannelSearchArgs>("channel_search", "Search for a channel"),
        ToolDefinition::new::<ChannelArchiveArgs>("channel_archive", "Archive a channel"),
        ToolDefinition::new::<ChannelUnarchiveArgs>("channel_unarchive", "Unarchive a channel"),
    ]
}
