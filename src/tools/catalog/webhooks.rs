//! Incoming and outgoing webhook tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::tools::{Argv, CommandArgs, Invocation, ToolDefinition};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WebhookListArgs {
    /// Team name or ID to filter webhooks by
    pub team: String,
}

impl CommandArgs for WebhookListArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["webhook", "list"]).opt_arg(&self.team).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookShowArgs {
    /// ID of the webhook to show
    pub webhook_id: String,
}

impl CommandArgs for WebhookShowArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["webhook", "show"]).arg(&self.webhook_id).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookDeleteArgs {
    /// ID of the webhook to delete
    pub webhook_id: String,
}

impl CommandArgs for WebhookDeleteArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["webhook", "delete"]).arg(&self.webhook_id).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookCreateIncomingArgs {
    /// Channel ID
    pub channel: String,
    /// User ID (creator)
    pub user: String,
    /// Incoming webhook display name
    #[serde(default)]
    pub display_name: String,
    /// Incoming webhook description
    #[serde(default)]
    pub description: String,
    /// Lock webhook to channel
    #[serde(default)]
    pub lock_to_channel: bool,
    /// Icon URL
    #[serde(default)]
    pub icon: String,
}

impl CommandArgs for WebhookCreateIncomingArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["webhook", "create-incoming"])
            .flag("--channel", &self.channel)
            .flag("--user", &self.user)
            .opt("--display-name", &self.display_name)
            .opt("--description", &self.description)
            .switch("--lock-to-channel", self.lock_to_channel)
            .opt("--icon", &self.icon)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookCreateOutgoingArgs {
    /// Team name or ID
    pub team: String,
    /// User username, email, or ID
    pub user: String,
    /// Outgoing webhook display name
    pub display_name: String,
    /// Channel name or ID
    #[serde(default)]
    pub channel: String,
    /// Outgoing webhook description
    #[serde(default)]
    pub description: String,
    /// Words to trigger webhook
    pub trigger_words: Vec<String>,
    /// When to trigger webhook (exact or start)
    #[serde(default)]
    pub trigger_when: String,
    /// Callback URLs
    pub urls: Vec<String>,
    /// Content-type for the webhook
    #[serde(default)]
    pub content_type: String,
    /// Icon URL
    #[serde(default)]
    pub icon: String,
}

impl CommandArgs for WebhookCreateOutgoingArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["webhook", "create-outgoing"])
            .flag("--team", &self.team)
            .flag("--user", &self.user)
            .flag("--display-name", &self.display_name)
            .opt("--channel", &self.channel)
            .opt("--description", &self.description)
            .repeated("--trigger-word", &self.trigger_words)
            .opt("--trigger-when", &self.trigger_when)
            .repeated("--url", &self.urls)
            .opt("--content-type", &self.content_type)
            .opt("--icon", &self.icon)
            .finish())
    }
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<WebhookListArgs>("webhook_list", "List webhooks"),
        ToolDefinition::new::<WebhookShowArgs>("webhook_show", "Show webhook details"),
        ToolDefinition::new::<WebhookCreateIncomingArgs>(
            "webhook_create_incoming",
            "Create incoming webhook",
        ),
        ToolDefinition::new::<WebhookCreateOutgoingArgs>(
            "webhook_create_outgoing",
            "Create outgoing webhook",
        ),
        ToolDefinition::new::<WebhookDeleteArgs>("webhook_delete", "Delete webhook"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outgoing_repeats_trigger_words_and_urls() {
        let args: WebhookCreateOutgoingArgs = serde_json::from_value(serde_json::json!({
            "team": "core",
            "user": "admin",
            "displayName": "Deploy",
            "triggerWords": ["deploy", "ship"],
            "urls": ["https://a", "https://b"]
        }))
        .unwrap();
        assert_eq!(
            args.build().unwrap().args,
            vec![
                "webhook", "create-outgoing", "--team", "core", "--user", "admin",
                "--display-name", "Deploy", "--trigger-word", "deploy", "--trigger-word",
                "ship", "--url", "https://a", "--url", "https://b"
            ]
        );
    }

    #[test]
    fn incoming_lock_switch() {
        let inv = WebhookCreateIncomingArgs {
            channel: "core:dev".into(),
            user: "admin".into(),
            display_name: String::new(),
            description: String::new(),
            lock_to_channel: true,
            icon: String::new(),
        }
        .build()
        .unwrap();
        assert_eq!(
            inv.args,
            vec![
                "webhook", "create-incoming", "--channel", "core:dev", "--user", "admin",
                "--lock-to-channel"
            ]
        );
    }

    #[test]
    fn show_and_delete_take_id() {
        let show: WebhookShowArgs =
            serde_json::from_value(serde_json::json!({"webhookId": "w1"})).unwrap();
        assert_eq!(show.build().unwrap().args, vec!["webhook", "show", "w1"]);
        let delete: WebhookDeleteArgs =
            serde_json::from_value(serde_json::json!({"webhookId": "w1"})).unwrap();
        assert_eq!(delete.build().unwrap().args, vec!["webhook", "delete", "w1"]);
    }

    #[test]
    fn outgoing_requires_trigger_words_and_urls() {
        let missing = serde_json::from_value::<WebhookCreateOutgoingArgs>(serde_json::json!({
            "team": "core",
            "user": "admin",
            "displayName": "Deploy"
        }));
        assert!(missing.is_err());

        let def = definitions()
            .into_iter()
            .find(|d| d.name() == "webhook_create_outgoing")
            .unwrap();
        let required = def.schema().get("required").unwrap().as_array().unwrap();
        assert!(required.contains(&serde_json::json!("triggerWords")));
        assert!(required.contains(&serde_json::json!("urls")));
    }
}
