// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Named base rule sets that a policy table can extend.

use std::collections::BTreeMap;

use crate::rules::{RuleCondition, RuleConfig, RuleSeverity, RuleValue};

/// Name of the conventional commits base rule set.
pub const CONVENTIONAL: &str = "conventional";

/// Aliases accepted for the conventional rule set.
const CONVENTIONAL_ALIASES: &[&str] = &[CONVENTIONAL, "@commitlint/config-conventional"];

/// Commit types allowed by the conventional base rule set.
pub const CONVENTIONAL_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Look up a base rule set by name.
pub fn base_rule_set(name: &str) -> Option<BTreeMap<String, RuleConfig>> {
    if CONVENTIONAL_ALIASES.contains(&name) {
        Some(conventional())
    } else {
        None
    }
}

fn conventional() -> BTreeMap<String, RuleConfig> {
    use RuleCondition::{Always, Never};
    use RuleSeverity::{Error, Warning};

    let rules = [
        ("body-leading-blank", RuleConfig::new(Warning, Always)),
        (
            "body-max-line-length",
            RuleConfig::new(Error, Always).with_value(RuleValue::Number(100)),
        ),
        ("footer-leading-blank", RuleConfig::new(Warning, Always)),
        (
            "footer-max-line-length",
            RuleConfig::new(Error, Always).with_value(RuleValue::Number(100)),
        ),
        (
            "header-max-length",
            RuleConfig::new(Error, Always).with_value(RuleValue::Number(100)),
        ),
        ("header-trim", RuleConfig::new(Error, Always)),
        (
            "subject-case",
            RuleConfig::new(Error, Never).with_list(&[
                "sentence-case",
                "start-case",
                "pascal-case",
                "upper-case",
            ]),
        ),
        ("subject-empty", RuleConfig::new(Error, Never)),
        (
            "subject-full-stop",
            RuleConfig::new(Error, Never).with_value(RuleValue::Text(".".to_string())),
        ),
        (
            "type-case",
            RuleConfig::new(Error, Always).with_value(RuleValue::Text("lower-case".to_string())),
        ),
        ("type-empty", RuleConfig::new(Error, Never)),
        (
            "type-enum",
            RuleConfig::new(Error, Always).with_list(CONVENTIONAL_TYPES),
        ),
    ];

    rules
        .into_iter()
        .map(|(name, rule)| (name.to_string(), rule))
        .collect()
}
