// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule declaration types.
//!
//! A rule is declared as a `[severity, condition, value]` array, e.g.
//! `type-enum = [2, "always", ["feat", "fix"]]`. The condition and value may
//! be omitted: `body-leading-blank = [0]`.

use std::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// How strictly a rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum RuleSeverity {
    /// The rule is disabled.
    Off,
    /// Failures are reported but do not fail the check.
    Warning,
    /// Failures fail the check.
    Error,
}

impl RuleSeverity {
    /// Get the numeric level used in configuration files.
    pub fn level(&self) -> u8 {
        match self {
            RuleSeverity::Off => 0,
            RuleSeverity::Warning => 1,
            RuleSeverity::Error => 2,
        }
    }

    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSeverity::Off => "off",
            RuleSeverity::Warning => "warning",
            RuleSeverity::Error => "error",
        }
    }
}

impl TryFrom<i64> for RuleSeverity {
    type Error = ConfigError;

    fn try_from(level: i64) -> Result<Self, ConfigError> {
        match level {
            0 => Ok(RuleSeverity::Off),
            1 => Ok(RuleSeverity::Warning),
            2 => Ok(RuleSeverity::Error),
            _ => Err(ConfigError::InvalidSeverity { level }),
        }
    }
}

impl From<RuleSeverity> for u8 {
    fn from(severity: RuleSeverity) -> Self {
        severity.level()
    }
}

impl fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a rule's predicate must hold (`always`) or must not hold (`never`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCondition {
    #[default]
    Always,
    Never,
}

impl RuleCondition {
    /// Get the string representation of the condition.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCondition::Always => "always",
            RuleCondition::Never => "never",
        }
    }

    /// Turn the raw result of a rule predicate into a pass/fail verdict.
    pub fn accepts(&self, holds: bool) -> bool {
        match self {
            RuleCondition::Always => holds,
            RuleCondition::Never => !holds,
        }
    }

    /// Modal verb used in diagnostics ("must" / "must not").
    pub fn modal(&self) -> &'static str {
        match self {
            RuleCondition::Always => "must",
            RuleCondition::Never => "must not",
        }
    }
}

impl fmt::Display for RuleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule-specific parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(usize),
    Text(String),
    List(Vec<String>),
}

impl RuleValue {
    /// Get the value as a number, if it is one.
    pub fn as_number(&self) -> Option<usize> {
        match self {
            RuleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as a list of strings. A single string is a one-item list.
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            RuleValue::List(items) => items.iter().map(String::as_str).collect(),
            RuleValue::Text(text) => vec![text.as_str()],
            RuleValue::Number(_) => Vec::new(),
        }
    }

    /// Get the value as text, if it is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Number(n) => write!(f, "{}", n),
            RuleValue::Text(text) => write!(f, "{:?}", text),
            RuleValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// A single rule declaration: `[severity, condition, value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub severity: RuleSeverity,
    pub condition: RuleCondition,
    pub value: Option<RuleValue>,
}

impl RuleConfig {
    /// Create a rule declaration.
    pub fn new(severity: RuleSeverity, condition: RuleCondition) -> Self {
        Self {
            severity,
            condition,
            value: None,
        }
    }

    /// A disabled rule.
    pub fn off() -> Self {
        Self::new(RuleSeverity::Off, RuleCondition::Always)
    }

    /// Set the rule value.
    pub fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Shorthand for a list value.
    pub fn with_list(self, items: &[&str]) -> Self {
        self.with_value(RuleValue::List(
            items.iter().map(|s| s.to_string()).collect(),
        ))
    }

    /// Whether the rule is evaluated at all.
    pub fn is_enabled(&self) -> bool {
        self.severity != RuleSeverity::Off
    }
}

impl fmt::Display for RuleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}", self.severity.level(), self.condition)?;
        if let Some(ref value) = self.value {
            write!(f, ", {}", value)?;
        }
        write!(f, "]")
    }
}

impl Serialize for RuleConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.value.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        seq.serialize_element(&self.condition)?;
        if let Some(ref value) = self.value {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleConfigVisitor;

        impl<'de> Visitor<'de> for RuleConfigVisitor {
            type Value = RuleConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array of [severity, condition, value]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleConfig, A::Error> {
                let severity: RuleSeverity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let condition: RuleCondition = seq.next_element()?.unwrap_or_default();
                let value: Option<RuleValue> = seq.next_element()?;

                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }

                Ok(RuleConfig {
                    severity,
                    condition,
                    value,
                })
            }
        }

        deserializer.deserialize_seq(RuleConfigVisitor)
    }
}
