//! Post tools. `post_create` is the one tool that can impersonate a user.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::tools::{Argv, CommandArgs, Invocation, ToolDefinition};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateArgs {
    /// Channel to post to (in team:channel format for named channels)
    pub channel: String,
    /// Message text to post
    pub message: String,
    /// Post ID to reply to
    #[serde(default)]
    pub reply_to: String,
    /// User ID to post as (impersonation)
    #[serde(default)]
    pub as_user_id: String,
}

impl CommandArgs for PostCreateArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["post", "create"])
            .flag("--message", &self.message)
            .opt("--reply-to", &self.reply_to)
            .arg(&self.channel)
            .impersonate(&self.as_user_id)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostListArgs {
    /// Channel to list posts from (in team:channel format for named channels)
    pub channel: String,
    /// Number of posts to list
    #[serde(default)]
    pub number: i64,
    /// Show post IDs
    #[serde(default)]
    pub show_ids: bool,
    /// List messages posted after a certain time (ISO 8601)
    #[serde(default)]
    pub since: String,
}

impl CommandArgs for PostListArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["post", "list"])
            .arg(&self.channel)
            .opt_int("--number", self.number)
            .switch("--show-ids", self.show_ids)
            .opt("--since", &self.since)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDeleteArgs {
    /// IDs of posts to delete
    pub post_ids: Vec<String>,
    /// Permanently delete the post and its contents
    #[serde(default)]
    pub permanent: bool,
}

impl CommandArgs for PostDeleteArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["post", "delete"])
            .switch("--permanent", self.permanent)
            .trailing(&self.post_ids)
            .finish())
    }
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<PostCreateArgs>("post_create", "Create a new post")
            .with_success_message("Post created successfully"),
        ToolDefinition::new::<PostListArgs>("post_list", "List posts in a channel"),
        ToolDefinition::new::<PostDeleteArgs>("post_delete", "Delete posts"),
    ]
}
