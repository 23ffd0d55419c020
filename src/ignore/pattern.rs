// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Regex-backed ignore predicates and the ordered ignore list.

use regex::Regex;

use crate::error::{ClintError, ConfigError, Result};

use super::defaults::default_ignores;

/// A pure predicate deciding whether a message bypasses all rules.
pub trait IgnorePredicate: std::fmt::Debug + Send + Sync {
    /// Whether the message must bypass all rule checks.
    fn is_ignored(&self, message: &str) -> bool;

    /// Name used when reporting which predicate matched.
    fn name(&self) -> &str;
}

/// An ignore predicate backed by a compiled regular expression.
#[derive(Debug, Clone)]
pub struct PatternIgnore {
    name: String,
    regex: Regex,
}

impl PatternIgnore {
    /// Compile a pattern. The pattern source doubles as the predicate name.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::named(pattern, pattern)
    }

    /// Compile a pattern under an explicit name.
    pub fn named(name: &str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            ClintError::Config(ConfigError::InvalidValue {
                key: "ignores".to_string(),
                message: format!("invalid pattern '{}': {}", pattern, e),
            })
        })?;

        Ok(Self {
            name: name.to_string(),
            regex,
        })
    }

    /// Get the pattern source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl IgnorePredicate for PatternIgnore {
    fn is_ignored(&self, message: &str) -> bool {
        self.regex.is_match(message)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered list of ignore predicates.
///
/// Configured predicates are consulted first, then the built-in defaults
/// unless they were disabled.
#[derive(Debug, Default)]
pub struct IgnoreList {
    predicates: Vec<Box<dyn IgnorePredicate>>,
    use_defaults: bool,
}

impl IgnoreList {
    /// Build an ignore list from pattern sources.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S], use_defaults: bool) -> Result<Self> {
        let mut list = Self {
            predicates: Vec::with_capacity(patterns.len()),
            use_defaults,
        };

        for pattern in patterns {
            list.push(Box::new(PatternIgnore::new(pattern.as_ref())?));
        }

        Ok(list)
    }

    /// Append a predicate.
    pub fn push(&mut self, predicate: Box<dyn IgnorePredicate>) {
        self.predicates.push(predicate);
    }

    /// Number of configured predicates (defaults not included).
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether no predicate is configured (defaults not included).
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Whether the built-in defaults are applied.
    pub fn uses_defaults(&self) -> bool {
        self.use_defaults
    }

    /// Configured predicate names, in evaluation order.
    pub fn names(&self) -> Vec<&str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }

    /// Return the name of the first predicate matching the message.
    pub fn matching(&self, message: &str) -> Option<&str> {
        if let Some(predicate) = self.predicates.iter().find(|p| p.is_ignored(message)) {
            return Some(predicate.name());
        }

        if self.use_defaults {
            return default_ignores()
                .iter()
                .find(|p| p.is_ignored(message))
                .map(|p| p.name());
        }

        None
    }

    /// Whether the message bypasses all rules.
    pub fn is_ignored(&self, message: &str) -> bool {
        self.matching(message).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = PatternIgnore::new("(unclosed").unwrap_err();
        assert!(err.to_string().contains("ignores"));
    }

    #[test]
    fn test_configured_patterns_first() {
        let list = IgnoreList::from_patterns(&["^WIP"], true).unwrap();
        assert_eq!(list.matching("WIP stuff"), Some("^WIP"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_defaults_can_be_disabled() {
        let with_defaults = IgnoreList::from_patterns::<&str>(&[], true).unwrap();
        assert!(with_defaults.is_ignored("Merge branch 'main' into feature"));

        let without_defaults = IgnoreList::from_patterns::<&str>(&[], false).unwrap();
        assert!(!without_defaults.is_ignored("Merge branch 'main' into feature"));
    }

    #[test]
    fn test_custom_predicate() {
        #[derive(Debug)]
        struct Empty;

        impl IgnorePredicate for Empty {
            fn is_ignored(&self, message: &str) -> bool {
                message.trim().is_empty()
            }

            fn name(&self) -> &str {
                "empty"
            }
        }

        let mut list = IgnoreList::default();
        list.push(Box::new(Empty));
        assert_eq!(list.matching("   "), Some("empty"));
        assert!(!list.is_ignored("feat: x"));
    }
}
