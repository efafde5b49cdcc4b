//! LDAP group sync toggles for channels and teams.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::tools::{Argv, CommandArgs, Invocation, ToolDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupAction {
    List,
    Status,
    Enable,
    Disable,
}

impl GroupAction {
    fn as_str(self) -> &'static str {
        match self {
            GroupAction::List => "list",
            GroupAction::Status => "status",
            GroupAction::Enable => "enable",
            GroupAction::Disable => "disable",
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupChannelArgs {
    /// Team and channel in format 'team:channel'
    pub team_channel: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GroupTeamArgs {
    /// Team name or ID
    pub team: String,
}

macro_rules! group_tool {
    ($name:ident, $record:ty, $field:ident, $scope:literal, $action:expr) => {
        #[derive(Debug, Clone, Deserialize, JsonSchema)]
        #[serde(transparent)]
        pub struct $name(pub $record);

        impl CommandArgs for $name {
            fn build(&self) -> anyhow::Result<Invocation> {
                Ok(Argv::command(["group", $scope, $action.as_str()])
                    .arg(&self.0.$field)
                    .finish())
            }
        }
    };
}

group_tool!(GroupChannelListArgs, GroupChannelArgs, team_channel, "channel", GroupAction::List);
group_tool!(GroupChannelStatusArgs, GroupChannelArgs, team_channel, "channel", GroupAction::Status);
group_tool!(GroupChannelEnableArgs, GroupChannelArgs, team_channel, "channel", GroupAction::Enable);
group_tool!(GroupChannelDisableArgs, GroupChannelArgs, team_channel, "channel", GroupAction::Disable);
group_tool!(GroupTeamListArgs, GroupTeamArgs, team, "team", GroupAction::List);
group_tool!(GroupTeamStatusArgs, GroupTeamArgs, team, "team", GroupAction::Status);
group_tool!(GroupTeamEnableArgs, GroupTeamArgs, team, "team", GroupAction::Enable);
group_tool!(GroupTeamDisableArgs, GroupTeamArgs, team, "team", GroupAction::Disable);

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<GroupChannelListArgs>(
            "group_channel_list",
            "List groups for a channel",
        ),
        ToolDefinition::new::<GroupChannelStatusArgs>(
            "group_channel_status",
            "Show group constraint status for a channel",
        ),
        ToolDefinition::new::<GroupChannelEnableArgs>(
            "group_channel_enable",
            "Enable group constraints for a channel",
        ),
        ToolDefinition::new::<GroupChannelDisableArgs>(
            "group_channel_disable",
            "Disable group constraints for a channel",
        ),
        ToolDefinition::new::<GroupTeamListArgs>("group_team_list", "List groups for a team"),
        ToolDefinition::new::<GroupTeamStatusArgs>(
            "group_team_status",
            "Show group constraint status for a team",
        ),
        ToolDefinition::new::<GroupTeamEnableArgs>(
            "group_team_enable",
            "Enable group constraints for a team",
        ),
        ToolDefinition::new::<GroupTeamDisableArgs>(
            "group_team_disable",
            "Disable group constraints for a team",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_scope_paths() {
        let args: GroupChannelEnableArgs =
            serde_json::from_value(serde_json::json!({"teamChannel": "core:dev"})).unwrap();
        assert_eq!(args.build().unwrap().args, vec!["group", "channel", "enable", "core:dev"]);
    }

    #[test]
    fn team_scope_paths() {
        let inv = GroupTeamStatusArgs(GroupTeamArgs { team: "core".into() })
            .build()
            .unwrap();
        assert_eq!(inv.args, vec!["group", "team", "status", "core"]);
    }
}
