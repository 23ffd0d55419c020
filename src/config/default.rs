// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::ClintConfig;

/// Get the default configuration.
pub fn default_config() -> ClintConfig {
    ClintConfig::default()
}

/// Generate the configuration file written by `clint init`.
pub fn example_config() -> &'static str {
    r#"# clint configuration file

# Base rule set applied before the rules below.
extends = ["conventional"]

# Allow GitHub revert messages, like:
#    Revert "introduce a bug"
#    Revert "introduce a bug" (#1234)
ignores = ['^Revert ".*"(?: \(#\d+\))?(?:\r?\n|$)']

# Merge, revert and fixup!/squash! messages are ignored by clint itself.
# Set to false to lint them as well.
default-ignores = true

# Rules are [severity, condition, value]
#   severity:  0 = off, 1 = warning, 2 = error
#   condition: "always" or "never"
[rules]
type-enum = [2, "always", [
    "revert", "feat", "fix", "perf", "docs", "test", "build", "refactor", "style", "chore", "temp", "ci",
]]

# Default rules we want to suppress.
body-leading-blank = [0, "always"]
body-max-line-length = [0, "always"]
footer-max-line-length = [0, "always"]
footer-leading-blank = [0, "always"]
subject-case = [0, "always", []]
subject-full-stop = [0, "never", "."]

[ui]
color = true
hints = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSeverity;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.rules["type-enum"].severity, RuleSeverity::Error);
        assert!(config.default_ignores);
    }

    #[test]
    fn test_example_config_parseable() {
        let example = example_config();
        let config: ClintConfig = toml::from_str(example).expect("Example config should parse");
        config.validate().expect("Example config should validate");
    }

    #[test]
    fn test_example_config_resolves_like_default() {
        let example: ClintConfig = toml::from_str(example_config()).unwrap();
        assert_eq!(example.extends, default_config().extends);
        assert_eq!(example.ignores, default_config().ignores);

        let severities = |config: ClintConfig| {
            config
                .resolved_rules()
                .unwrap()
                .into_iter()
                .map(|(name, rule)| (name, rule.severity))
                .collect::<Vec<_>>()
        };
        assert_eq!(severities(example), severities(default_config()));
    }
}
