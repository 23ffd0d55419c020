// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The revert predicate and the built-in default ignores.

use lazy_static::lazy_static;

use super::pattern::PatternIgnore;

/// GitHub-style revert messages:
///
/// ```text
/// Revert "introduce a bug"
/// Revert "introduce a bug" (#1234)
/// ```
///
/// The whole header line must have that shape; body and footer lines after it
/// are allowed.
pub const REVERT_PATTERN: &str = r#"^Revert ".*"(?: \(#\d+\))?(?:\r?\n|$)"#;

const DEFAULT_PATTERNS: &[(&str, &str)] = &[
    (
        "merge",
        r"(?m)^((Merge pull request)|(Merge (.*?) into (.*?)|(Merge branch (.*?)))(?:\r?\n)*$)",
    ),
    ("merge-tag", r"(?m)^(Merge tag (.*?))(?:\r?\n)*$"),
    ("revert", r"^(R|r)evert (.*)"),
    ("autosquash", r"^(amend|fixup|squash)!"),
    (
        "merged",
        r"^(Merged (.*?)(in|into) (.*)|Merged PR (.*): (.*))",
    ),
    ("merge-remote", r"^Merge remote-tracking branch(\s*)(.*)"),
    ("automatic-merge", r"^Automatic merge(.*)"),
    ("auto-merged", r"^Auto-merged (.*?) into (.*)"),
    (
        "semver",
        r"^(?:chore(?:\([^)]+\))?:)?[ \t]*[v=]?(?:0|[1-9]\d*)\.(?:0|[1-9]\d*)\.(?:0|[1-9]\d*)(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?[ \t]*(?:\r?\n|$)",
    ),
];

lazy_static! {
    static ref DEFAULT_IGNORES: Vec<PatternIgnore> = DEFAULT_PATTERNS
        .iter()
        .map(|(name, pattern)| PatternIgnore::named(name, pattern).unwrap())
        .collect();
}

/// Ignore predicates applied by the linter itself, independent of the policy
/// table: merge commits, tags, reverts, autosquash commits and release
/// version headers.
pub fn default_ignores() -> &'static [PatternIgnore] {
    &DEFAULT_IGNORES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ignore::IgnorePredicate;

    fn revert() -> PatternIgnore {
        PatternIgnore::new(REVERT_PATTERN).unwrap()
    }

    #[test]
    fn test_revert_matches_plain_revert() {
        let p = revert();
        assert!(p.is_ignored(r#"Revert "introduce a bug""#));
        assert!(p.is_ignored(r#"Revert "feat: add widget""#));
        assert!(p.is_ignored(r#"Revert """#));
    }

    #[test]
    fn test_revert_matches_pr_reference() {
        let p = revert();
        assert!(p.is_ignored(r#"Revert "introduce a bug" (#1234)"#));
        assert!(p.is_ignored(r#"Revert "feat: add widget" (#42)"#));
    }

    #[test]
    fn test_revert_allows_body_after_header() {
        let p = revert();
        assert!(p.is_ignored(
            "Revert \"feat: add widget\"\n\nThis reverts commit 0123456789abcdef."
        ));
        assert!(p.is_ignored("Revert \"feat: add widget\" (#42)\r\n\r\nbody"));
    }

    #[test]
    fn test_revert_rejects_wrong_prefix() {
        let p = revert();
        assert!(!p.is_ignored(r#"Reverted "X""#));
        assert!(!p.is_ignored(r#"revert "X""#));
        assert!(!p.is_ignored("Revert 'X'"));
        assert!(!p.is_ignored(r#"Please Revert "X""#));
    }

    #[test]
    fn test_revert_rejects_malformed_pr_reference() {
        let p = revert();
        assert!(!p.is_ignored(r#"Revert "X" (#)"#));
        assert!(!p.is_ignored(r#"Revert "X" (123)"#));
        assert!(!p.is_ignored(r#"Revert "X" trailing text"#));
    }

    #[test]
    fn test_revert_quote_does_not_cross_lines() {
        let p = revert();
        assert!(!p.is_ignored("Revert \"X\n\" (#1)"));
    }

    #[test]
    fn test_default_ignores_compile() {
        assert_eq!(default_ignores().len(), DEFAULT_PATTERNS.len());
    }

    #[test]
    fn test_default_ignores_match_merges() {
        let matches = |msg: &str| default_ignores().iter().any(|p| p.is_ignored(msg));

        assert!(matches("Merge pull request #1 from user/branch"));
        assert!(matches("Merge branch 'main' into feature"));
        assert!(matches("Merge tag 'v1.0.0'"));
        assert!(matches("Merge remote-tracking branch 'origin/main'"));
        assert!(matches("fixup! feat: add widget"));
        assert!(matches("Automatic merge from CI"));
        assert!(matches("Auto-merged main into feature"));
        assert!(!matches("feat: add widget"));
        assert!(!matches("wip: add widget"));
    }

    #[test]
    fn test_default_ignores_match_release_versions() {
        let matches = |msg: &str| default_ignores().iter().any(|p| p.is_ignored(msg));

        assert!(matches("1.2.3"));
        assert!(matches("v1.2.3"));
        assert!(matches("chore: 1.2.3"));
        assert!(matches("chore(release): v2.0.0-rc.1\n\nRelease notes"));
        assert!(!matches("1.2"));
        assert!(!matches("01.2.3"));
        assert!(!matches("1.2.3 and more"));
        assert!(!matches("feat: 1.2.3"));
    }
}
