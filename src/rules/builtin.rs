// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Every rule computes whether its predicate holds for a message; the rule's
//! condition then decides if that is a pass (`always`) or a failure (`never`).

use crate::commit::CommitMessage;

use super::case::ensure_case;
use super::severity::{RuleCondition, RuleValue};

/// Default line limit for the max-length rules.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// A failed rule, before a severity is attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Line number (1-based) where the problem was found.
    pub line: Option<usize>,
}

impl Violation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            line: None,
        }
    }

    fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Trait for commit message rules.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the commit message and return a violation if it fails.
    fn check(
        &self,
        message: &CommitMessage,
        condition: RuleCondition,
        value: Option<&RuleValue>,
    ) -> Option<Violation>;

    /// Get the rule name.
    fn name(&self) -> &str;
}

type CheckFn = fn(&CommitMessage, RuleCondition, Option<&RuleValue>) -> Option<Violation>;

/// A rule implemented by a plain function.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRule {
    name: &'static str,
    check: CheckFn,
}

impl Rule for BuiltinRule {
    fn check(
        &self,
        message: &CommitMessage,
        condition: RuleCondition,
        value: Option<&RuleValue>,
    ) -> Option<Violation> {
        (self.check)(message, condition, value)
    }

    fn name(&self) -> &str {
        self.name
    }
}

const BUILTIN_RULES: &[BuiltinRule] = &[
    BuiltinRule { name: "body-leading-blank", check: check_body_leading_blank },
    BuiltinRule { name: "body-max-line-length", check: check_body_max_line_length },
    BuiltinRule { name: "footer-leading-blank", check: check_footer_leading_blank },
    BuiltinRule { name: "footer-max-line-length", check: check_footer_max_line_length },
    BuiltinRule { name: "header-max-length", check: check_header_max_length },
    BuiltinRule { name: "header-trim", check: check_header_trim },
    BuiltinRule { name: "subject-case", check: check_subject_case },
    BuiltinRule { name: "subject-empty", check: check_subject_empty },
    BuiltinRule { name: "subject-full-stop", check: check_subject_full_stop },
    BuiltinRule { name: "type-case", check: check_type_case },
    BuiltinRule { name: "type-empty", check: check_type_empty },
    BuiltinRule { name: "type-enum", check: check_type_enum },
];

/// All built-in rules, sorted by name.
pub fn builtin_rules() -> &'static [BuiltinRule] {
    BUILTIN_RULES
}

/// Look up a built-in rule by name.
pub fn find_rule(name: &str) -> Option<&'static BuiltinRule> {
    BUILTIN_RULES.iter().find(|rule| rule.name == name)
}

/// Body must (not) be separated from the header by a blank line.
fn check_body_leading_blank(
    message: &CommitMessage,
    condition: RuleCondition,
    _value: Option<&RuleValue>,
) -> Option<Violation> {
    message.body.as_ref()?;

    let lines = message.lines();
    let blank = lines.get(1).map(|l| l.trim().is_empty()).unwrap_or(false);

    if condition.accepts(blank) {
        None
    } else {
        Some(
            Violation::new(format!("body {} have leading blank line", condition.modal()))
                .suggest("Separate the header and the body with an empty line")
                .at_line(2),
        )
    }
}

/// Footer must (not) be preceded by a blank line.
fn check_footer_leading_blank(
    message: &CommitMessage,
    condition: RuleCondition,
    _value: Option<&RuleValue>,
) -> Option<Violation> {
    message.footer.as_ref()?;
    let start = message.footer_line?;

    let lines = message.lines();
    let blank = start
        .checked_sub(1)
        .and_then(|prev| lines.get(prev))
        .map(|l| l.trim().is_empty())
        .unwrap_or(false);

    if condition.accepts(blank) {
        None
    } else {
        Some(
            Violation::new(format!("footer {} have leading blank line", condition.modal()))
                .suggest("Separate the footer from the body with an empty line")
                .at_line(start + 1),
        )
    }
}

fn max_length(value: Option<&RuleValue>) -> usize {
    value
        .and_then(RuleValue::as_number)
        .unwrap_or(DEFAULT_MAX_LENGTH)
}

/// Find the first line longer than `max`, returning its offset and length.
fn first_long_line(text: &str, max: usize) -> Option<(usize, usize)> {
    text.lines()
        .map(|line| line.chars().count())
        .enumerate()
        .find(|(_, len)| *len > max)
}

/// Offset of `section` within the raw message lines.
fn section_offset(message: &CommitMessage, section: &str) -> usize {
    let first = section.lines().next().unwrap_or("");
    message
        .lines()
        .iter()
        .skip(1)
        .position(|line| *line == first)
        .map(|p| p + 1)
        .unwrap_or(1)
}

/// Body lines must not exceed the configured length. The condition is not used.
fn check_body_max_line_length(
    message: &CommitMessage,
    _condition: RuleCondition,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let body = message.body.as_ref()?;
    let max = max_length(value);
    let (offset, len) = first_long_line(body, max)?;

    Some(
        Violation::new(format!(
            "body's lines must not be longer than {} characters (found {})",
            max, len
        ))
        .suggest("Wrap the body text")
        .at_line(section_offset(message, body) + offset + 1),
    )
}

/// Footer lines must not exceed the configured length. The condition is not used.
fn check_footer_max_line_length(
    message: &CommitMessage,
    _condition: RuleCondition,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let footer = message.footer.as_ref()?;
    let max = max_length(value);
    let (offset, len) = first_long_line(footer, max)?;
    let start = message.footer_line.unwrap_or(1);

    Some(
        Violation::new(format!(
            "footer's lines must not be longer than {} characters (found {})",
            max, len
        ))
        .suggest("Wrap the footer text")
        .at_line(start + offset + 1),
    )
}

/// Header must not exceed the configured length. The condition is not used.
fn check_header_max_length(
    message: &CommitMessage,
    _condition: RuleCondition,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let max = max_length(value);
    let len = message.header.chars().count();

    if len > max {
        Some(
            Violation::new(format!(
                "header must not be longer than {} characters, current length is {}",
                max, len
            ))
            .suggest(format!("Shorten the header to {} characters or less", max))
            .at_line(1),
        )
    } else {
        None
    }
}

/// Header must (not) be free of surrounding whitespace.
fn check_header_trim(
    message: &CommitMessage,
    condition: RuleCondition,
    _value: Option<&RuleValue>,
) -> Option<Violation> {
    let trimmed = message.header.trim() == message.header;

    if condition.accepts(trimmed) {
        None
    } else {
        Some(
            Violation::new(format!(
                "header {} be free of leading or trailing whitespace",
                condition.modal()
            ))
            .suggest("Remove whitespace around the header")
            .at_line(1),
        )
    }
}

/// Subject must (not) be in one of the listed cases.
fn check_subject_case(
    message: &CommitMessage,
    condition: RuleCondition,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let subject = message.subject.as_deref()?;
    let cases = value.map(RuleValue::as_list).unwrap_or_default();

    // Subjects starting with a digit or symbol have no case to check.
    if cases.is_empty() || !subject.chars().next()?.is_alphabetic() {
        return None;
    }

    let matches = cases.iter().any(|case| ensure_case(subject, case));

    if condition.accepts(matches) {
        None
    } else {
        Some(
            Violation::new(format!(
                "subject {} be {}",
                condition.modal(),
                cases.join(", ")
            ))
            .at_line(1),
        )
    }
}

/// Subject must (not) be empty.
fn check_subject_empty(
    message: &CommitMessage,
    condition: RuleCondition,
    _value: Option<&RuleValue>,
) -> Option<Violation> {
    let empty = message.subject_str().trim().is_empty();

    if condition.accepts(empty) {
        None
    } else {
        let message = match condition {
            RuleCondition::Always => "subject must be empty",
            RuleCondition::Never => "subject may not be empty",
        };
        Some(
            Violation::new(message)
                .suggest("Use the form 'type(scope): subject'")
                .at_line(1),
        )
    }
}

/// Subject must (not) end with the given character.
fn check_subject_full_stop(
    message: &CommitMessage,
    condition: RuleCondition,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let subject = message.subject.as_deref()?;
    let stop = value.and_then(RuleValue::as_text).unwrap_or(".");
    let ends = subject.ends_with(stop);

    if condition.accepts(ends) {
        None
    } else {
        Some(
            Violation::new(format!("subject {} end with full stop", condition.modal()))
                .suggest(match condition {
                    RuleCondition::Always => format!("Add a trailing '{}'", stop),
                    RuleCondition::Never => format!("Remove the trailing '{}'", stop),
                })
                .at_line(1),
        )
    }
}

/// Type must (not) be in the given case.
fn check_type_case(
    message: &CommitMessage,
    condition: RuleCondition,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let commit_type = message.commit_type.as_deref()?;
    let cases = value
        .map(RuleValue::as_list)
        .unwrap_or_else(|| vec!["lower-case"]);

    let matches = cases.iter().any(|case| ensure_case(commit_type, case));

    if condition.accepts(matches) {
        None
    } else {
        Some(
            Violation::new(format!(
                "type {} be {}",
                condition.modal(),
                cases.join(", ")
            ))
            .at_line(1),
        )
    }
}

/// Type must (not) be empty.
fn check_type_empty(
    message: &CommitMessage,
    condition: RuleCondition,
    _value: Option<&RuleValue>,
) -> Option<Violation> {
    let empty = message.type_str().trim().is_empty();

    if condition.accepts(empty) {
        None
    } else {
        let message = match condition {
            RuleCondition::Always => "type must be empty",
            RuleCondition::Never => "type may not be empty",
        };
        Some(
            Violation::new(message)
                .suggest("Use the form 'type(scope): subject'")
                .at_line(1),
        )
    }
}

/// Type must (not) be one of the listed tokens. Membership is case-sensitive.
fn check_type_enum(
    message: &CommitMessage,
    condition: RuleCondition,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let commit_type = message.type_str();
    let allowed = value.map(RuleValue::as_list).unwrap_or_default();
    let member = allowed.iter().any(|t| *t == commit_type);

    if condition.accepts(member) {
        None
    } else {
        Some(
            Violation::new(format!(
                "type '{}' {} be one of [{}]",
                commit_type,
                condition.modal(),
                allowed.join(", ")
            ))
            .suggest(match condition {
                RuleCondition::Always => format!("Use one of: {}", allowed.join(", ")),
                RuleCondition::Never => "Use a different commit type".to_string(),
            })
            .at_line(1),
        )
    }
}
