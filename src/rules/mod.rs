// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module provides the rule declarations, the built-in rules and the
//! engine that applies a resolved policy table to commit messages.

mod builtin;
pub mod case;
mod engine;
mod severity;
mod validator;

pub use builtin::*;
pub use engine::RuleEngine;
pub use severity::{RuleCondition, RuleConfig, RuleSeverity, RuleValue};
pub use validator::{ValidationIssue, ValidationResult};
