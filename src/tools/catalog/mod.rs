//! Built-in mmctl tool catalog, one module per command family.

pub mod admin;
pub mod bots;
pub mod channels;
pub mod groups;
pub mod plugins;
pub mod posts;
pub mod system;
pub mod teams;
pub mod users;
pub mod webhooks;

use super::{ToolError, ToolRegistry};

/// Registry holding every built-in tool.
pub fn builtin_registry() -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    registry.register_all(system::definitions())?;
    registry.register_all(users::definitions())?;
    registry.register_all(teams::definitions())?;
    registry.register_all(channels::definitions())?;
    registry.register_all(posts::definitions())?;
    registry.register_all(plugins::definitions())?;
    registry.register_all(webhooks::definitions())?;
    registry.register_all(bots::definitions())?;
    registry.register_all(groups::definitions())?;
    registry.register_all(admin::definitions())?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn catalog_registers_without_collisions() {
        let registry = builtin_registry().unwrap();
        assert_eq!(registry.len(), 63);
        for name in ["mmctl", "post_create", "group_team_disable", "auth_current"] {
            assert!(registry.get(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn every_schema_is_an_object() {
        let registry = builtin_registry().unwrap();
        for def in registry.iter() {
            assert_eq!(def.schema().get("type"), Some(&json!("object")), "{}", def.name());
            assert!(def.schema().get("$ref").is_none(), "{}", def.name());
            assert!(!def.description().is_empty());
        }
    }

    #[test]
    fn channel_create_schema_lists_required_fields() {
        let registry = builtin_registry().unwrap();
        let schema = registry.get("channel_create").unwrap().schema();
        let required: Vec<_> = schema
            .get("required")
            .and_then(|v| v.as_array())
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        for field in ["team", "name", "displayName"] {
            assert!(required.contains(&field));
        }
        assert!(!required.contains(&"private"));
    }

    #[test]
    fn newtype_records_expose_properties() {
        let registry = builtin_registry().unwrap();
        let schema = registry.get("group_channel_enable").unwrap().schema();
        let props = schema.get("properties").and_then(|v| v.as_object()).unwrap();
        assert!(props.contains_key("teamChannel"));
    }

    #[test]
    fn post_create_builds_with_impersonation() {
        let registry = builtin_registry().unwrap();
        let args = json!({"channel": "core:dev", "message": "hi", "asUserId": "u1"});
        let inv = registry
            .get("post_create")
            .unwrap()
            .build(args.as_object().cloned().unwrap())
            .unwrap();
        assert_eq!(inv.context, vec!["--local-user-id", "u1"]);
        assert_eq!(inv.args, vec!["post", "create", "--message", "hi", "core:dev"]);
    }

    #[test]
    fn user_list_with_null_options_is_bare() {
        let registry = builtin_registry().unwrap();
        let args = json!({"team": null, "page": null});
        let inv = registry
            .get("user_list")
            .unwrap()
            .build(args.as_object().cloned().unwrap())
            .unwrap();
        assert_eq!(inv.args, vec!["user", "list"]);
    }

    fn property_description(registry: &ToolRegistry, tool: &str, field: &str) -> String {
        registry.get(tool).unwrap().schema()["properties"][field]["description"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn sibling_tools_keep_their_own_help_text() {
        let registry = builtin_registry().unwrap();
        assert_eq!(registry.get("bot_create").unwrap().description(), "Create a new bot");
        assert_eq!(
            property_description(&registry, "user_activate", "users"),
            "Users to activate (email, username, or ID)"
        );
        assert_eq!(
            property_description(&registry, "role_member", "users"),
            "Users to demote to member (username, email, or user ID)"
        );
        assert_eq!(
            property_description(&registry, "permission_remove", "role"),
            "Role to remove permissions from"
        );
        assert_eq!(
            property_description(&registry, "bot_enable", "bot"),
            "Bot username to enable"
        );
        assert_eq!(
            property_description(&registry, "webhook_delete", "webhookId"),
            "ID of the webhook to delete"
        );
    }
}
