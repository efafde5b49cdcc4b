//! Bot account tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::tools::{Argv, CommandArgs, Invocation, ToolDefinition};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BotListArgs {
    /// Include all bots (including deleted and orphaned)
    pub all: bool,
    /// Only show orphaned bots
    pub orphaned: bool,
}

impl CommandArgs for BotListArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["bot", "list"])
            .switch("--all", self.all)
            .switch("--orphaned", self.orphaned)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotCreateArgs {
    /// Username for the new bot
    pub username: String,
    /// Display name for the bot
    #[serde(default)]
    pub display_name: String,
    /// Description for the bot
    #[serde(default)]
    pub description: String,
    /// Auto-generate access token for the bot
    #[serde(default)]
    pub with_token: bool,
}

impl CommandArgs for BotCreateArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["bot", "create"])
            .arg(&self.username)
            .opt("--display-name", &self.display_name)
            .opt("--description", &self.description)
            .switch("--with-token", self.with_token)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotAssignArgs {
    /// Bot username to assign
    pub bot: String,
    /// New owner username
    pub new_owner: String,
}

impl CommandArgs for BotAssignArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["bot", "assign"])
            .arg(&self.bot)
            .arg(&self.new_owner)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BotDisableArgs {
    /// Bot username to disable
    pub bot: String,
}

impl CommandArgs for BotDisableArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["bot", "disable"]).arg(&self.bot).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BotEnableArgs {
    /// Bot username to enable
    pub bot: String,
}

impl CommandArgs for BotEnableArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["bot", "enable"]).arg(&self.bot).finish())
    }
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<BotListArgs>("bot_list", "List bots")
            .with_success_message("Bots listed successfully"),
        ToolDefinition::new::<BotCreateArgs>("bot_create", "Create a new bot")
            .with_success_message("Bot created successfully"),
        ToolDefinition::new::<BotAssignArgs>("bot_assign", "Assign a bot to a new owner")
            .with_success_message("Bot assigned to new owner successfully"),
        ToolDefinition::new::<BotDisableArgs>("bot_disable", "Disable a bot")
            .with_success_message("Bot disabled successfully"),
        ToolDefinition::new::<BotEnableArgs>("bot_enable", "Enable a bot")
            .with_success_message("Bot enabled successfully"),
    ]
}
