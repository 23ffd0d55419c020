// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use console::{style, Style};

use super::severity::RuleSeverity;

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Name of the rule that failed.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Severity the rule was configured with.
    pub severity: RuleSeverity,
    /// Line number where the issue was found.
    pub line: Option<usize>,
}

impl ValidationIssue {
    /// Whether this issue fails the check.
    pub fn is_error(&self) -> bool {
        self.severity == RuleSeverity::Error
    }

    /// Format the issue for terminal output.
    pub fn format(&self, hints: bool) -> String {
        let prefix = if self.is_error() {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error() {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(&self.code),
            self.message
        );

        if let Some(line) = self.line {
            output.push_str(&format!(" {}", style(format!("(line {})", line)).dim()));
        }

        if hints {
            if let Some(ref suggestion) = self.suggestion {
                output.push_str(&format!(
                    "\n  {} {}",
                    style("→").dim(),
                    style(suggestion).dim()
                ));
            }
        }

        output
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "rule": self.code,
            "severity": self.severity.as_str(),
            "message": self.message,
            "suggestion": self.suggestion,
            "line": self.line,
        })
    }
}

/// Result of linting a commit message.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// The original message.
    pub message: String,
    /// Commit SHA if validating an existing commit.
    pub commit_sha: Option<String>,
    /// Name of the ignore predicate that matched, if any.
    pub ignored_by: Option<String>,
    /// Validation errors.
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new validation result.
    pub fn new(message: String) -> Self {
        Self {
            message,
            commit_sha: None,
            ignored_by: None,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Create a result for a message that bypassed all rules.
    pub fn ignored(message: String, predicate: impl Into<String>) -> Self {
        Self {
            ignored_by: Some(predicate.into()),
            ..Self::new(message)
        }
    }

    /// Record an issue under errors or warnings according to its severity.
    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            RuleSeverity::Error => self.errors.push(issue),
            RuleSeverity::Warning => self.warnings.push(issue),
            RuleSeverity::Off => {}
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether an ignore predicate matched.
    pub fn is_ignored(&self) -> bool {
        self.ignored_by.is_some()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>, hints: bool) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(hints),
        }
    }

    /// Print in text format.
    fn print_text(&self, hints: bool) {
        let first_line = self.message.lines().next().unwrap_or("");
        let status = if self.is_ignored() {
            style("○").dim()
        } else if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        match self.commit_sha {
            Some(ref sha) => {
                let short_sha = &sha[..7.min(sha.len())];
                println!("{} {} {}", status, style(short_sha).cyan(), first_line);
            }
            None => println!("{} {}", status, first_line),
        }

        if let Some(ref predicate) = self.ignored_by {
            println!("  {}", style(format!("ignored by {}", predicate)).dim());
            return;
        }

        // Print errors
        for error in &self.errors {
            println!("  {}", error.format(hints));
        }

        // Print warnings
        for warning in &self.warnings {
            println!("  {}", warning.format(hints));
        }
    }

    /// JSON representation used by `--format json`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "ignored": self.is_ignored(),
            "ignored_by": self.ignored_by,
            "commit": self.commit_sha,
            "message": self.message,
            "errors": self.errors.iter().map(ValidationIssue::to_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(ValidationIssue::to_json).collect::<Vec<_>>(),
        })
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_ignored() {
            "Ignored".to_string()
        } else if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(code: &str, severity: RuleSeverity) -> ValidationIssue {
        ValidationIssue {
            code: code.to_string(),
            message: format!("{} failed", code),
            suggestion: Some("Fix it".to_string()),
            severity,
            line: Some(1),
        }
    }

    #[test]
    fn test_validation_result_valid() {
        let result = ValidationResult::new("feat: test".to_string());
        assert!(result.is_valid());
        assert!(!result.is_ignored());
        assert_eq!(result.issue_count(), 0);
    }

    #[test]
    fn test_push_sorts_by_severity() {
        let mut result = ValidationResult::new("test".to_string());
        result.push(issue("type-enum", RuleSeverity::Error));
        result.push(issue("body-leading-blank", RuleSeverity::Warning));
        result.push(issue("subject-case", RuleSeverity::Off));

        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.issue_count(), 2);
    }

    #[test]
    fn test_validation_issue_format() {
        let formatted = issue("type-enum", RuleSeverity::Error).format(true);
        assert!(formatted.contains("type-enum"));
        assert!(formatted.contains("type-enum failed"));
        assert!(formatted.contains("Fix it"));

        let formatted = issue("type-enum", RuleSeverity::Error).format(false);
        assert!(!formatted.contains("Fix it"));
    }

    #[test]
    fn test_ignored_result() {
        let result = ValidationResult::ignored("Revert \"x\"".to_string(), "revert");
        assert!(result.is_valid());
        assert!(result.is_ignored());
        assert_eq!(result.summary(), "Ignored");
        assert_eq!(result.to_json()["ignored_by"], "revert");
    }

    #[test]
    fn test_summary() {
        let mut result = ValidationResult::new("test".to_string());
        assert!(result.summary().contains("Valid"));

        result.push(issue("warn", RuleSeverity::Warning));
        assert!(result.summary().contains("1 warning"));

        result.push(issue("err", RuleSeverity::Error));
        assert!(result.summary().contains("Invalid"));
    }

    #[test]
    fn test_json_shape() {
        let mut result = ValidationResult::new("wip: x".to_string());
        result.push(issue("type-enum", RuleSeverity::Error));
        let json = result.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["rule"], "type-enum");
        assert_eq!(json["errors"][0]["severity"], "error");
    }
}
