// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the clint application.
//!
//! Rule violations are not errors: they are reported as data in a
//! [`ValidationResult`](crate::rules::ValidationResult). The types here cover
//! malformed policy tables, git access and hook management.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for clint operations.
#[derive(Error, Debug)]
pub enum ClintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Commit errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors, raised while loading a policy table.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Invalid severity level {level} (expected 0, 1 or 2)")]
    InvalidSeverity { level: i64 },

    #[error("Unknown rule '{rule}'")]
    UnknownRule { rule: String },

    #[error("Unknown base rule set '{name}'")]
    UnknownBaseRuleSet { name: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Validation-related errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{count} rule violation(s) found")]
    RuleViolations { count: usize },

    #[error("{count} warning(s) found in strict mode")]
    StrictWarnings { count: usize },
}

/// Commit message input errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Failed to read commit message from {source_name}: {message}")]
    ReadFailed {
        source_name: String,
        message: String,
    },

    #[error("Empty commit message")]
    EmptyMessage,
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Hook not found: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for clint operations.
pub type Result<T> = std::result::Result<T, ClintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ClintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
