// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the policy table that can be loaded from clint.toml.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ClintError, ConfigError, Result};
use crate::ignore::{IgnoreList, REVERT_PATTERN};
use crate::rules::case::{known_cases, to_case};
use crate::rules::{find_rule, RuleCondition, RuleConfig, RuleSeverity};

use super::preset::{base_rule_set, CONVENTIONAL};

/// Commit types accepted by the default policy table.
pub const DEFAULT_TYPES: &[&str] = &[
    "revert", "feat", "fix", "perf", "docs", "test", "build", "refactor", "style", "chore", "temp",
    "ci",
];

/// Rules the default policy table switches off.
pub const DISABLED_RULES: &[&str] = &[
    "body-leading-blank",
    "body-max-line-length",
    "footer-max-line-length",
    "footer-leading-blank",
    "subject-case",
    "subject-full-stop",
];

/// The commit message policy table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClintConfig {
    /// Base rule sets applied before `rules`, in order.
    pub extends: Vec<String>,

    /// Ignore patterns; a matching message skips all rules.
    pub ignores: Vec<String>,

    /// Whether the built-in ignores (merges, reverts, autosquash) apply.
    pub default_ignores: bool,

    /// Link printed under failing reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,

    /// Rule overrides, keyed by rule name.
    pub rules: BTreeMap<String, RuleConfig>,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl Default for ClintConfig {
    fn default() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            "type-enum".to_string(),
            RuleConfig::new(RuleSeverity::Error, RuleCondition::Always).with_list(DEFAULT_TYPES),
        );
        for name in DISABLED_RULES {
            rules.insert(name.to_string(), RuleConfig::off());
        }

        Self {
            extends: vec![CONVENTIONAL.to_string()],
            ignores: vec![REVERT_PATTERN.to_string()],
            default_ignores: true,
            help_url: None,
            rules,
            ui: UiConfig::default(),
        }
    }
}

impl ClintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Resolve the effective rule table: base rule sets in order, then the
    /// table's own rules on top.
    pub fn resolved_rules(&self) -> Result<BTreeMap<String, RuleConfig>> {
        let mut resolved = BTreeMap::new();

        for name in &self.extends {
            let base = base_rule_set(name).ok_or_else(|| {
                ClintError::Config(ConfigError::UnknownBaseRuleSet { name: name.clone() })
            })?;
            resolved.extend(base);
        }

        for (name, rule) in &self.rules {
            if find_rule(name).is_none() {
                return Err(ClintError::Config(ConfigError::UnknownRule {
                    rule: name.clone(),
                }));
            }
            if name.ends_with("-case") {
                check_case_names(name, rule)?;
            }
            resolved.insert(name.clone(), rule.clone());
        }

        tracing::debug!(
            "Resolved {} rules from {} base rule set(s)",
            resolved.len(),
            self.extends.len()
        );

        Ok(resolved)
    }

    /// Compile the ignore list.
    pub fn ignore_list(&self) -> Result<IgnoreList> {
        IgnoreList::from_patterns(&self.ignores, self.default_ignores)
    }

    /// Check every declaration, so malformed tables fail before any message
    /// is linted.
    pub fn validate(&self) -> Result<()> {
        self.resolved_rules()?;
        self.ignore_list()?;
        Ok(())
    }
}

/// Case rules only accept case names the case checker understands.
fn check_case_names(name: &str, rule: &RuleConfig) -> Result<()> {
    let cases = match &rule.value {
        Some(value) => value.as_list(),
        None => Vec::new(),
    };

    match cases.iter().find(|case| to_case("", case).is_none()) {
        Some(unknown) => Err(ClintError::Config(ConfigError::InvalidValue {
            key: format!("rules.{}", name),
            message: format!(
                "unknown case '{}' (expected one of: {})",
                unknown,
                known_cases().join(", ")
            ),
        })),
        None => Ok(()),
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to show suggestions under each issue.
    pub hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            hints: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClintConfig::default();
        assert_eq!(config.extends, vec!["conventional"]);
        assert_eq!(config.ignores.len(), 1);
        assert_eq!(config.rules.len(), 7);

        let type_enum = &config.rules["type-enum"];
        assert_eq!(type_enum.severity, RuleSeverity::Error);
        assert_eq!(type_enum.condition, RuleCondition::Always);
        assert_eq!(type_enum.value.as_ref().unwrap().as_list(), DEFAULT_TYPES);
    }

    #[test]
    fn test_default_overrides_are_off() {
        let resolved = ClintConfig::default().resolved_rules().unwrap();
        for name in DISABLED_RULES {
            assert_eq!(resolved[*name].severity, RuleSeverity::Off, "{}", name);
        }
        // Inherited from the base set untouched.
        assert_eq!(resolved["type-empty"].severity, RuleSeverity::Error);
        assert_eq!(resolved["header-max-length"].severity, RuleSeverity::Error);
    }

    #[test]
    fn test_unknown_base_rule_set() {
        let config = ClintConfig {
            extends: vec!["angular".to_string()],
            ..ClintConfig::default()
        };
        assert!(matches!(
            config.resolved_rules(),
            Err(ClintError::Config(ConfigError::UnknownBaseRuleSet { .. }))
        ));
    }

    #[test]
    fn test_unknown_rule() {
        let mut config = ClintConfig::default();
        config
            .rules
            .insert("scope-enum-typo".to_string(), RuleConfig::off());
        assert!(matches!(
            config.validate(),
            Err(ClintError::Config(ConfigError::UnknownRule { .. }))
        ));
    }

    #[test]
    fn test_unknown_case_name() {
        let mut config = ClintConfig::default();
        config.rules.insert(
            "subject-case".to_string(),
            RuleConfig::new(RuleSeverity::Error, RuleCondition::Never)
                .with_list(&["sentence-case", "spongebob-case"]),
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("spongebob-case"));
        assert!(err.to_string().contains("lower-case"));

        config.rules.insert(
            "type-case".to_string(),
            RuleConfig::new(RuleSeverity::Error, RuleCondition::Always).with_list(&["lowercase"]),
        );
        config.rules.insert("subject-case".to_string(), RuleConfig::off());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_extends_uses_only_own_rules() {
        let config = ClintConfig {
            extends: Vec::new(),
            ..ClintConfig::default()
        };
        assert_eq!(config.resolved_rules().unwrap().len(), 7);
    }

    #[test]
    fn test_config_serialization() {
        let config = ClintConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("type-enum"));
        let back: ClintConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, config);
    }
}
