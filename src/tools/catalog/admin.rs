//! Server administration tools: jobs, permissions, LDAP, licensing, OAuth,
//! SAML and stored auth credentials.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::tools::{Argv, CommandArgs, Invocation, ToolDefinition};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct JobListArgs {
    /// Page number
    pub page: i64,
    /// Number of jobs per page
    pub per_page: i64,
    /// Fetch all jobs
    pub all: bool,
    /// List of job IDs to filter by
    pub job_ids: Vec<String>,
    /// Filter by job type
    pub job_type: String,
    /// Filter by job status
    pub status: String,
}

impl CommandArgs for JobListArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["job", "list"])
            .opt_int("--page", self.page)
            .opt_int("--per-page", self.per_page)
            .switch("--all", self.all)
            .joined("--ids", &self.job_ids)
            .opt("--type", &self.job_type)
            .opt("--status", &self.status)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdateArgs {
    /// ID of the job to update
    pub job_id: String,
    /// New status for the job (pending, cancel_requested, canceled)
    pub status: String,
    /// Force the status update, overriding restrictions
    #[serde(default)]
    pub force: bool,
}

impl CommandArgs for JobUpdateArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["job", "update"])
            .arg(&self.job_id)
            .arg(&self.status)
            .switch("--force", self.force)
            .finish())
    }
}

fn permission_invocation(action: &str, role: &str, permissions: &[String]) -> Invocation {
    Argv::command(["permissions", action])
        .arg(role)
        .trailing(permissions)
        .finish()
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PermissionAddArgs {
    /// Role to add permissions to
    pub role: String,
    /// Permissions to add to the role
    pub permissions: Vec<String>,
}

impl CommandArgs for PermissionAddArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(permission_invocation("add", &self.role, &self.permissions))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PermissionRemoveArgs {
    /// Role to remove permissions from
    pub role: String,
    /// Permissions to remove from the role
    pub permissions: Vec<String>,
}

impl CommandArgs for PermissionRemoveArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(permission_invocation("remove", &self.role, &self.permissions))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PermissionResetArgs {
    /// Role to reset permissions for
    pub role: String,
}

impl CommandArgs for PermissionResetArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["permissions", "reset"]).arg(&self.role).finish())
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LdapSyncArgs {
    /// Include members who left or were removed from a group-synced team/channel
    pub include_removed_members: bool,
}

impl CommandArgs for LdapSyncArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["ldap", "sync"])
            .switch("--include-removed-members", self.include_removed_members)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LdapIdMigrateArgs {
    /// New ID attribute to migrate to (e.g., 'objectGUID')
    pub id_attribute: String,
}

impl CommandArgs for LdapIdMigrateArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["ldap", "idmigrate"]).arg(&self.id_attribute).finish())
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct LicenseRemoveArgs {}

impl CommandArgs for LicenseRemoveArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["license", "remove"]).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LicenseUploadArgs {
    /// Path to the license file
    pub license_path: String,
}

impl CommandArgs for LicenseUploadArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["license", "upload"]).arg(&self.license_path).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LicenseUploadStringArgs {
    /// License string to upload
    pub license_string: String,
}

impl CommandArgs for LicenseUploadStringArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["license", "upload-string"])
            .arg(&self.license_string)
            .finish())
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct OauthListArgs {
    /// Page number to fetch
    pub page: i64,
    /// Number of items per page
    pub per_page: i64,
}

impl CommandArgs for OauthListArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["oauth", "list"])
            .opt_int("--page", self.page)
            .opt_int("--per-page", self.per_page)
            .finish())
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SamlAuthDataResetArgs {
    /// Include deleted users
    pub include_deleted: bool,
    /// Perform a dry run without making changes
    pub dry_run: bool,
    /// Comma-separated list of user IDs to reset
    pub users: Vec<String>,
    /// Skip confirmation
    pub yes: bool,
}

impl CommandArgs for SamlAuthDataResetArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["saml", "auth-data-reset"])
            .switch("--include-deleted", self.include_deleted)
            .switch("--dry-run", self.dry_run)
            .joined("--users", &self.users)
            .switch("--yes", self.yes)
            .finish())
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct AuthListArgs {}

impl CommandArgs for AuthListArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["auth", "list"]).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthSetArgs {
    /// Server name to set as active
    pub server_name: String,
}

impl CommandArgs for AuthSetArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["auth", "set"]).arg(&self.server_name).finish())
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct AuthCurrentArgs {}

impl CommandArgs for AuthCurrentArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["auth", "current"]).finish())
    }
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<JobListArgs>("job_list", "List jobs")
            .with_success_message("Jobs listed successfully"),
        ToolDefinition::new::<JobUpdateArgs>("job_update", "Update job status")
            .with_success_message("Job updated successfully"),
        ToolDefinition::new::<PermissionAddArgs>("permission_add", "Add permissions to a role")
            .with_success_message("Permissions added successfully"),
        ToolDefinition::new::<PermissionRemoveArgs>(
            "permission_remove",
            "Remove permissions from a role",
        )
        .with_success_message("Permissions removed successfully"),
        ToolDefinition::new::<PermissionResetArgs>(
            "permission_reset",
            "Reset permissions for a role",
        )
        .with_success_message("Permissions reset successfully"),
        ToolDefinition::new::<LdapSyncArgs>("ldap_sync", "Sync LDAP users and groups")
            .with_success_message("LDAP sync completed successfully"),
        ToolDefinition::new::<LdapIdMigrateArgs>("ldap_idmigrate", "Migrate LDAP ID attribute")
            .with_success_message("LDAP ID migration completed successfully"),
        ToolDefinition::new::<LicenseRemoveArgs>("license_remove", "Remove the current license"),
        ToolDefinition::new::<LicenseUploadArgs>("license_upload", "Upload a license file"),
        ToolDefinition::new::<LicenseUploadStringArgs>(
            "license_upload_string",
            "Upload a license from a string",
        ),
        ToolDefinition::new::<OauthListArgs>("oauth_list", "List OAuth2 applications"),
        ToolDefinition::new::<SamlAuthDataResetArgs>(
            "saml_auth_data_reset",
            "Reset SAML AuthData field to email",
        ),
        ToolDefinition::new::<AuthListArgs>("auth_list", "List stored credentials")
            .with_success_message("Auth credentials listed successfully"),
        ToolDefinition::new::<AuthSetArgs>("auth_set", "Set active credentials")
            .with_success_message("Auth credentials set successfully"),
        ToolDefinition::new::<AuthCurrentArgs>("auth_current", "Show current credentials")
            .with_success_message("Current auth credentials retrieved successfully"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_list_joins_ids() {
        let inv = JobListArgs {
            job_ids: vec!["a".into(), "b".into(), "c".into()],
            job_type: "ldap_sync".into(),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(inv.args, vec!["job", "list", "--ids", "a,b,c", "--type", "ldap_sync"]);
    }

    #[test]
    fn job_update_positionals_then_force() {
        let args: JobUpdateArgs = serde_json::from_value(serde_json::json!({
            "jobId": "j1",
            "status": "canceled",
            "force": true
        }))
        .unwrap();
        assert_eq!(args.build().unwrap().args, vec!["job", "update", "j1", "canceled", "--force"]);
    }

    #[test]
    fn permission_add_role_then_permissions() {
        let inv = PermissionAddArgs {
            role: "system_user".into(),
            permissions: vec!["create_post".into(), "edit_post".into()],
        }
        .build()
        .unwrap();
        assert_eq!(inv.args, vec!["permissions", "add", "system_user", "create_post", "edit_post"]);

        let args: PermissionRemoveArgs = serde_json::from_value(serde_json::json!({
            "role": "system_user",
            "permissions": ["edit_post"]
        }))
        .unwrap();
        assert_eq!(
            args.build().unwrap().args,
            vec!["permissions", "remove", "system_user", "edit_post"]
        );
    }

    #[test]
    fn saml_reset_flags_in_order() {
        let inv = SamlAuthDataResetArgs {
            dry_run: true,
            users: vec!["u1".into(), "u2".into()],
            yes: true,
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(
            inv.args,
            vec!["saml", "auth-data-reset", "--dry-run", "--users", "u1,u2", "--yes"]
        );
    }

    #[test]
    fn license_upload_string_subcommand() {
        let inv = LicenseUploadStringArgs {
            license_string: "abc".into(),
        }
        .build()
        .unwrap();
        assert_eq!(inv.args, vec!["license", "upload-string", "abc"]);
    }

    #[test]
    fn bare_commands() {
        assert_eq!(LicenseRemoveArgs::default().build().unwrap().args, vec!["license", "remove"]);
        assert_eq!(AuthCurrentArgs::default().build().unwrap().args, vec!["auth", "current"]);
        assert_eq!(OauthListArgs::default().build().unwrap().args, vec!["oauth", "list"]);
        assert_eq!(LdapSyncArgs::default().build().unwrap().args, vec!["ldap", "sync"]);
    }
}
