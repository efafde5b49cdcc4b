//! Team tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::tools::{Argv, CommandArgs, Invocation, ToolDefinition};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TeamListArgs {}

impl CommandArgs for TeamListArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["team", "list"]).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamCreateArgs {
    /// Team name (lowercase, no spaces)
    pub name: String,
    /// Team display name
    pub display_name: String,
    /// Administrator email address
    #[serde(default)]
    pub email: String,
    /// Create a private team
    #[serde(default)]
    pub private: bool,
}

impl CommandArgs for TeamCreateArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["team", "create"])
            .flag("--name", &self.name)
            .flag("--display-name", &self.display_name)
            .opt("--email", &self.email)
            .switch("--private", self.private)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TeamSearchArgs {
    /// Terms to search for
    pub terms: Vec<String>,
}

impl CommandArgs for TeamSearchArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["team", "search"]).trailing(&self.terms).finish())
    }
}

/// Change team visibility. Setting both flags is passed through and left to
/// mmctl to reject.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TeamModifyArgs {
    /// Team to modify (name or ID)
    pub team: String,
    /// Make the team private
    #[serde(default)]
    pub private: bool,
    /// Make the team public
    #[serde(default)]
    pub public: bool,
}

impl CommandArgs for TeamModifyArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["team", "modify"])
            .arg(&self.team)
            .switch("--private", self.private)
            .switch("--public", self.public)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamRenameArgs {
    /// Team to rename (name or ID)
    pub team: String,
    /// New display name
    pub display_name: String,
}

impl CommandArgs for TeamRenameArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["team", "rename"])
            .arg(&self.team)
            .flag("--display-name", &self.display_name)
            .finish())
    }
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<TeamListArgs>("team_list", "List Mattermost teams"),
        ToolDefinition::new::<TeamCreateArgs>("team_create", "Create a new team"),
        ToolDefinition::new::<TeamSearchArgs>("team_search", "Search for teams"),
        ToolDefinition::new::<TeamModifyArgs>("team_modify", "Modify a team"),
        ToolDefinition::new::<TeamRenameArgs>("team_rename", "Rename a team"),
    ]
}
