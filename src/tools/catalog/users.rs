//! User and role tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::tools::{Argv, CommandArgs, Invocation, ToolDefinition};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UserListArgs {
    /// Filter users by team
    pub team: String,
    /// Show only inactive users
    pub inactive: bool,
    /// Page number
    pub page: i64,
    /// Number of users per page
    pub per_page: i64,
}

impl CommandArgs for UserListArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["user", "list"])
            .opt("--team", &self.team)
            .switch("--inactive", self.inactive)
            .opt_int("--page", self.page)
            .opt_int("--per-page", self.per_page)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UserSearchArgs {
    /// Terms to search for (email, username, or user ID)
    pub terms: Vec<String>,
}

impl CommandArgs for UserSearchArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["user", "search"]).trailing(&self.terms).finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateArgs {
    /// Email address for the user
    pub email: String,
    /// Username for the user
    pub username: String,
    /// Password for the user
    pub password: String,
    /// First name for the user
    #[serde(default)]
    pub first_name: String,
    /// Last name for the user
    #[serde(default)]
    pub last_name: String,
    /// Nickname for the user
    #[serde(default)]
    pub nickname: String,
    /// Locale (e.g., en, fr) for the user
    #[serde(default)]
    pub locale: String,
    /// Whether to make the user a system admin
    #[serde(default)]
    pub system_admin: bool,
    /// Whether to mark the email as verified
    #[serde(default)]
    pub email_verified: bool,
    /// Whether to create as a guest user
    #[serde(default)]
    pub guest: bool,
    /// Whether to disable the welcome email
    #[serde(default)]
    pub disable_welcome_email: bool,
}

impl CommandArgs for UserCreateArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["user", "create"])
            .flag("--email", &self.email)
            .flag("--username", &self.username)
            .flag("--password", &self.password)
            .opt("--firstname", &self.first_name)
            .opt("--lastname", &self.last_name)
            .opt("--nickname", &self.nickname)
            .opt("--locale", &self.locale)
            .switch("--system-admin", self.system_admin)
            .switch("--email-verified", self.email_verified)
            .switch("--guest", self.guest)
            .switch("--disable-welcome-email", self.disable_welcome_email)
            .finish())
    }
}

fn batch_invocation(path: [&str; 2], users: &[String]) -> Invocation {
    Argv::command(path).trailing(users).finish()
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UserActivateArgs {
    /// Users to activate (email, username, or ID)
    pub users: Vec<String>,
}

impl CommandArgs for UserActivateArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(batch_invocation(["user", "activate"], &self.users))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UserDeactivateArgs {
    /// Users to deactivate (email, username, or ID)
    pub users: Vec<String>,
}

impl CommandArgs for UserDeactivateArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(batch_invocation(["user", "deactivate"], &self.users))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserEmailArgs {
    /// User to change email for (username, email, or ID)
    pub user: String,
    /// New email address
    pub new_email: String,
}

impl CommandArgs for UserEmailArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(Argv::command(["user", "email"])
            .arg(&self.user)
            .arg(&self.new_email)
            .finish())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RoleSystemAdminArgs {
    /// Users to promote to system admin (username, email, or user ID)
    pub users: Vec<String>,
}

impl CommandArgs for RoleSystemAdminArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(batch_invocation(["roles", "system-admin"], &self.users))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RoleMemberArgs {
    /// Users to demote to member (username, email, or user ID)
    pub users: Vec<String>,
}

impl CommandArgs for RoleMemberArgs {
    fn build(&self) -> anyhow::Result<Invocation> {
        Ok(batch_invocation(["roles", "member"], &self.users))
    }
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<UserListArgs>("user_list", "List Mattermost users"),
        ToolDefinition::new::<UserSearchArgs>("user_search", "Search for users"),
        ToolDefinition::new::<UserCreateArgs>("user_create", "Create a new user"),
        ToolDefinition::new::<UserActivateArgs>("user_activate", "Activate users"),
        ToolDefinition::new::<UserDeactivateArgs>("user_deactivate", "Deactivate users"),
        ToolDefinition::new::<UserEmailArgs>("user_email", "Change a user's email"),
        ToolDefinition::new::<RoleSystemAdminArgs>("role_system_admin", "Make users system admins")
            .with_success_message("Users promoted to system admin successfully"),
        ToolDefinition::new::<RoleMemberArgs>("role_member", "Demote users to members")
            .with_success_message("Users demoted to member role successfully"),
    ]
}
