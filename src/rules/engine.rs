// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use std::collections::BTreeMap;
use std::path::Path;

use crate::commit::CommitMessage;
use crate::config::ClintConfig;
use crate::error::Result;
use crate::git;
use crate::ignore::IgnoreList;

use super::builtin::{find_rule, Rule};
use super::severity::RuleConfig;
use super::validator::{ValidationIssue, ValidationResult};

/// Rule engine for validating commit messages.
///
/// Holds the resolved rule table and ignore list read-only, so one engine
/// can lint any number of messages.
#[derive(Debug)]
pub struct RuleEngine {
    rules: BTreeMap<String, RuleConfig>,
    ignores: IgnoreList,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    ///
    /// Fails if the policy table declares unknown rules or base rule sets,
    /// or an ignore pattern does not compile.
    pub fn new(config: &ClintConfig) -> Result<Self> {
        Ok(Self {
            rules: config.resolved_rules()?,
            ignores: config.ignore_list()?,
        })
    }

    /// The resolved rule table.
    pub fn rules(&self) -> &BTreeMap<String, RuleConfig> {
        &self.rules
    }

    /// The ignore list.
    pub fn ignores(&self) -> &IgnoreList {
        &self.ignores
    }

    /// Lint a raw commit message.
    pub fn validate(&self, message: &str) -> ValidationResult {
        if let Some(predicate) = self.ignores.matching(message) {
            tracing::debug!("Message ignored by {}", predicate);
            return ValidationResult::ignored(message.to_string(), predicate);
        }

        let parsed = CommitMessage::parse(message);
        self.validate_parsed(&parsed, message)
    }

    /// Apply the rule table to an already parsed message.
    pub fn validate_parsed(&self, parsed: &CommitMessage, original: &str) -> ValidationResult {
        let mut result = ValidationResult::new(original.to_string());

        for (name, config) in self.rules.iter().filter(|(_, c)| c.is_enabled()) {
            let Some(rule) = find_rule(name) else {
                continue;
            };
            self.apply(rule, config, parsed, &mut result);
        }

        result
    }

    fn apply(
        &self,
        rule: &dyn Rule,
        config: &RuleConfig,
        parsed: &CommitMessage,
        result: &mut ValidationResult,
    ) {
        if let Some(violation) = rule.check(parsed, config.condition, config.value.as_ref()) {
            tracing::debug!("Rule {} failed: {}", rule.name(), violation.message);
            result.push(ValidationIssue {
                code: rule.name().to_string(),
                message: violation.message,
                suggestion: violation.suggestion,
                severity: config.severity,
                line: violation.line,
            });
        }
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<ValidationResult> {
        let (sha, message) = git::get_commit(reference)?;
        let mut result = self.validate(&message);
        result.commit_sha = Some(sha);
        Ok(result)
    }

    /// Check a range of commits.
    pub fn check_range(&self, range: &str) -> Result<Vec<ValidationResult>> {
        let commits = git::get_commit_range(range)?;

        Ok(commits
            .into_iter()
            .map(|(oid, message)| {
                let mut result = self.validate(&message);
                result.commit_sha = Some(oid);
                result
            })
            .collect())
    }

    /// Check a message file, such as the one git passes to `commit-msg`.
    pub fn check_file(&self, path: &Path) -> Result<ValidationResult> {
        let message = git::read_message_file(path)?;
        Ok(self.validate(&message))
    }
}
