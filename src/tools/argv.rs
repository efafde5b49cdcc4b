//! Argument vector construction.
//!
//! `Argv` is a small consuming builder that encodes mmctl's calling
//! conventions so each tool's record -> argv translation stays declarative:
//!
//!   arg / args       positional tokens (always emitted, even when empty)
//!   flag             mandatory `--flag value` pair
//!   opt / opt_int    optional `--flag value`, omitted on empty / <= 0
//!   opt_arg          optional positional, omitted on empty
//!   switch           bare `--flag`, only when true
//!   joined           one `--flag a,b,c` token pair for the whole list
//!   repeated         `--flag a --flag b` per element
//!   trailing         list elements appended as bare positionals
//!   impersonate      `--local-user-id <id>` in the invocation context
//!
//! Tokens are opaque strings; nothing here quotes or escapes.

/// Flag mmctl reads (alongside `--local`) to run a command as another user.
pub const IMPERSONATION_FLAG: &str = "--local-user-id";

/// Delimiter for the joined list convention.
pub const LIST_DELIMITER: &str = ",";

/// Built argument vector for one call.
///
/// `context` holds invocation-level flags that mmctl binds to the process
/// rather than the subcommand; the executor places them right after the mode
/// flag and before `args`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub context: Vec<String>,
    pub args: Vec<String>,
}

impl Invocation {
    /// Subcommand tokens only, no context flags.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            context: Vec::new(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Argv {
    context: Vec<String>,
    tokens: Vec<String>,
}

impl Argv {
    /// Start from the subcommand path, e.g. `["channel", "create"]`.
    pub fn command<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            context: Vec::new(),
            tokens: path.into_iter().map(Into::into).collect(),
        }
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.tokens.push(value.into());
        self
    }

    pub fn opt_arg(self, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.arg(value)
        }
    }

    pub fn flag(mut self, name: &str, value: impl Into<String>) -> Self {
        self.tokens.push(name.to_string());
        self.tokens.push(value.into());
        self
    }

    pub fn opt(self, name: &str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.flag(name, value)
        }
    }

    pub fn opt_int(self, name: &str, value: i64) -> Self {
        if value > 0 {
            self.flag(name, value.to_string())
        } else {
            self
        }
    }

    pub fn switch(mut self, name: &str, on: bool) -> Self {
        if on {
            self.tokens.push(name.to_string());
        }
        self
    }

    pub fn joined(self, name: &str, values: &[String]) -> Self {
        if values.is_empty() {
            self
        } else {
            self.flag(name, values.join(LIST_DELIMITER))
        }
    }

    pub fn repeated(mut self, name: &str, values: &[String]) -> Self {
        for value in values {
            self.tokens.push(name.to_string());
            self.tokens.push(value.clone());
        }
        self
    }

    pub fn trailing(mut self, values: &[String]) -> Self {
        self.tokens.extend(values.iter().cloned());
        self
    }

    /// Run the command as `user_id`. Empty ids are ignored.
    ///
    /// The flags go to the invocation context, never into the subcommand
    /// tokens: mmctl only honours them ahead of the subcommand.
    pub fn impersonate(mut self, user_id: &str) -> Self {
        if !user_id.is_empty() {
            self.context.push(IMPERSONATION_FLAG.to_string());
            self.context.push(user_id.to_string());
        }
        self
    }

    pub fn finish(self) -> Invocation {
        Invocation {
            context: self.context,
            args: self.tokens,
        }
    }
}

impl From<Argv> for Invocation {
    fn from(argv: Argv) -> Self {
        argv.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn required_pairs_emit_even_when_empty() {
        let inv = Argv::command(["channel", "create"])
            .flag("--team", "")
            .flag("--name", "town-square")
            .finish();
        assert_eq!(inv.args, list(&["channel", "create", "--team", "", "--name", "town-square"]));
    }

    #[test]
    fn optional_scalars_omitted_on_zero_values() {
        let inv = Argv::command(["user", "list"])
            .opt("--team", "")
            .opt_int("--page", 0)
            .opt_int("--per-page", -3)
            .opt_arg("")
            .finish();
        assert_eq!(inv.args, list(&["user", "list"]));

        let inv = Argv::command(["user", "list"])
            .opt("--team", "core")
            .opt_int("--page", 2)
            .finish();
        assert_eq!(inv.args, list(&["user", "list", "--team", "core", "--page", "2"]));
    }

    #[test]
    fn switches_are_bare_and_only_when_true() {
        let inv = Argv::command(["bot", "list"])
            .switch("--all", true)
            .switch("--orphaned", false)
            .finish();
        assert_eq!(inv.args, list(&["bot", "list", "--all"]));
        assert!(!inv.args.iter().any(|t| t == "false" || t == "true"));
    }

    #[test]
    fn joined_list_is_one_pair() {
        let inv = Argv::command(["job", "list"])
            .joined("--ids", &list(&["a", "b", "c"]))
            .finish();
        assert_eq!(inv.args, list(&["job", "list", "--ids", "a,b,c"]));

        let inv = Argv::command(["job", "list"]).joined("--ids", &[]).finish();
        assert_eq!(inv.args, list(&["job", "list"]));
    }

    #[test]
    fn repeated_list_emits_flag_per_element() {
        let inv = Argv::command(["webhook", "create-outgoing"])
            .repeated("--url", &list(&["a", "b", "c"]))
            .finish();
        assert_eq!(
            inv.args,
            list(&["webhook", "create-outgoing", "--url", "a", "--url", "b", "--url", "c"])
        );
    }

    #[test]
    fn trailing_list_appends_positionals() {
        let inv = Argv::command(["user", "activate"])
            .trailing(&list(&["alice", "bob"]))
            .finish();
        assert_eq!(inv.args, list(&["user", "activate", "alice", "bob"]));
    }

    #[test]
    fn building_twice_is_identical() {
        let build = || {
            Argv::command(["webhook", "create-outgoing"])
                .flag("--team", "core")
                .opt("--channel", "")
                .repeated("--trigger-word", &list(&["deploy", "ship"]))
                .switch("--when", true)
                .impersonate("u1")
                .finish()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn impersonation_lands_in_context_only() {
        let inv = Argv::command(["post", "create"])
            .flag("--message", "hi")
            .impersonate("u123")
            .arg("team:town-square")
            .finish();
        assert_eq!(inv.context, list(&[IMPERSONATION_FLAG, "u123"]));
        assert_eq!(inv.args, list(&["post", "create", "--message", "hi", "team:town-square"]));

        let inv = Argv::command(["post", "create"]).impersonate("").finish();
        assert!(inv.context.is_empty());
    }
}
