// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// Marker line identifying hooks installed by clint.
pub const HOOK_MARKER: &str = "# clint git hook";

/// Git hooks clint can install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    /// Lints the message file git passes as `$1`.
    CommitMsg,
}

impl HookTemplate {
    /// Get all hook templates.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    /// Hook file name inside `.git/hooks`.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    /// Generate the hook script.
    pub fn generate(&self) -> String {
        let command = match self {
            HookTemplate::CommitMsg => r#"clint check --edit "$1""#,
        };

        format!(
            "#!/bin/sh\n{}\n# Generated by clint v{}\n\nexec {}\n",
            HOOK_MARKER,
            crate::version::VERSION,
            command
        )
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commit-msg" | "commit_msg" => Ok(HookTemplate::CommitMsg),
            _ => Err(()),
        }
    }
}
