// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! clint - Commit message policy linter
//!
//! Lints commit messages against a table of conventional commit rules.
//!
//! # Features
//!
//! - **Policy Table**: A `conventional` base rule set overlaid by `clint.toml`
//! - **Ignore Predicates**: Reverts and merges skip linting entirely
//! - **Git Integration**: Lint `HEAD`, any commit range, or the message being committed
//! - **Git Hooks**: Installs a `commit-msg` hook that runs `clint check --edit`
//!
//! # Example
//!
//! ```no_run
//! use clint::config::ClintConfig;
//! use clint::rules::RuleEngine;
//!
//! let config = ClintConfig::load().unwrap();
//! let engine = RuleEngine::new(&config).unwrap();
//!
//! let result = engine.validate("wip: add widget");
//! for error in &result.errors {
//!     println!("{}: {}", error.code, error.message);
//! }
//! ```

pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod ignore;
pub mod rules;

pub use config::ClintConfig;
pub use error::{ClintError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of clint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let short = GIT_SHA.map(|sha| &sha[..7.min(sha.len())]);
        match (short, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => format!("{} ({} {})", VERSION, sha, date),
            (Some(sha), None) => format!("{} ({})", VERSION, sha),
            _ => VERSION.to_string(),
        }
    }

}
