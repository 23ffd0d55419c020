// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clint - Commit message policy linter
///
/// Lints commit messages against a policy table of conventional commit rules.
#[derive(Parser, Debug)]
#[command(name = "clint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message policy linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint commit messages (default command)
    Check(CheckArgs),

    /// Print the resolved rule table and ignore list
    Rules,

    /// Manage git hooks
    Hooks(HooksArgs),

    /// Write a clint.toml with the default policy table
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Check all commits in a range
    #[arg(long)]
    pub range: bool,

    /// Lint a message file (defaults to .git/COMMIT_EDITMSG)
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["message", "stdin", "range"])]
    pub edit: Option<Option<PathBuf>>,

    /// Lint the given message text
    #[arg(short, long, conflicts_with_all = ["stdin", "range"])]
    pub message: Option<String>,

    /// Read the message from standard input
    #[arg(long, conflicts_with = "range")]
    pub stdin: bool,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install git hooks
    Install {
        /// Specific hook to install
        #[arg(value_name = "HOOK")]
        hook: Option<String>,

        /// Replace existing hooks (they are backed up)
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall git hooks
    Uninstall {
        /// Specific hook to uninstall
        #[arg(value_name = "HOOK")]
        hook: Option<String>,
    },

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            range: false,
            edit: None,
            message: None,
            stdin: false,
            strict: false,
        }
    }
}
