// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the conventional commit header: `type(scope)!: subject`.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>\w*)(?:\(.*\))?!?: (?P<subject>.*)$"
    ).unwrap();

    /// A line that starts the footer: a trailer token or a breaking change note.
    static ref FOOTER_REGEX: Regex = Regex::new(
        r"^(?:BREAKING[ -]CHANGE: |[A-Za-z][\w-]*: |[A-Za-z][\w-]* #)"
    ).unwrap();
}

/// Line git writes before the diff in `commit --verbose`; everything below is dropped.
const SCISSORS: &str = "------------------------ >8 ------------------------";

/// A parsed commit message.
///
/// Parsing never fails: a message that does not follow the conventional
/// header shape has no type or subject, and the rules report that. Scope and
/// the `!` marker are accepted in the header but not checked by any rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// The message with git comment lines removed.
    pub raw: String,
    /// First line of the message.
    pub header: String,
    /// Commit type (feat, fix, etc.), exactly as written.
    pub commit_type: Option<String>,
    /// Subject line.
    pub subject: Option<String>,
    /// Optional body.
    pub body: Option<String>,
    /// Optional footer (references, breaking changes, etc.).
    pub footer: Option<String>,
    /// Zero-based line index where the footer starts.
    pub footer_line: Option<usize>,
}

impl CommitMessage {
    /// Parse a commit message from a string.
    pub fn parse(message: &str) -> Self {
        let raw = strip_comments(message);
        let lines: Vec<&str> = raw.lines().collect();
        let header = lines.first().copied().unwrap_or("").to_string();

        let (commit_type, subject) = match HEADER_REGEX.captures(&header) {
            Some(captures) => (
                captures.name("type").map(|m| m.as_str().to_string()),
                captures.name("subject").map(|m| m.as_str().to_string()),
            ),
            None => (None, None),
        };

        let footer_line = lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, line)| FOOTER_REGEX.is_match(line))
            .map(|(i, _)| i);

        let body_end = footer_line.unwrap_or(lines.len());
        let body = join_trimmed(lines.get(1..body_end).unwrap_or(&[]));
        let footer = footer_line.and_then(|start| join_trimmed(&lines[start..]));

        Self {
            raw,
            header,
            commit_type: commit_type.filter(|t| !t.is_empty()),
            subject: subject.filter(|s| !s.is_empty()),
            body,
            footer,
            footer_line,
        }
    }

    /// All lines of the message, header included.
    pub fn lines(&self) -> Vec<&str> {
        self.raw.lines().collect()
    }

    /// Whether the message is empty once comments are removed.
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Get the commit type, or an empty string.
    pub fn type_str(&self) -> &str {
        self.commit_type.as_deref().unwrap_or("")
    }

    /// Get the subject, or an empty string.
    pub fn subject_str(&self) -> &str {
        self.subject.as_deref().unwrap_or("")
    }
}

/// Drop git comment lines and anything below the scissors line.
fn strip_comments(message: &str) -> String {
    let mut kept = Vec::new();

    for line in message.lines() {
        if line.starts_with('#') {
            if line.contains(SCISSORS) {
                break;
            }
            continue;
        }
        kept.push(line.trim_end_matches('\r'));
    }

    while kept.last().map(|l| l.trim().is_empty()).unwrap_or(false) {
        kept.pop();
    }

    kept.join("\n")
}

fn join_trimmed(lines: &[&str]) -> Option<String> {
    let text = lines.join("\n");
    let text = text.trim_matches('\n').trim_end();
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let msg = CommitMessage::parse("feat(core): add new feature");
        assert_eq!(msg.commit_type.as_deref(), Some("feat"));
        assert_eq!(msg.subject.as_deref(), Some("add new feature"));
        assert!(msg.body.is_none());
        assert!(msg.footer.is_none());
    }

    #[test]
    fn test_parse_keeps_type_case() {
        let msg = CommitMessage::parse("Feat: add widget");
        assert_eq!(msg.type_str(), "Feat");
    }

    #[test]
    fn test_parse_with_body() {
        let msg = CommitMessage::parse("fix: fix bug\n\nThis is the body\nover two lines");
        assert_eq!(
            msg.body.as_deref(),
            Some("This is the body\nover two lines")
        );
        assert!(msg.footer.is_none());
    }

    #[test]
    fn test_parse_with_footer() {
        let msg = CommitMessage::parse(
            "fix: fix bug\n\nThis is the body\n\nReviewed-by: Someone\nCloses #12",
        );
        assert_eq!(msg.body.as_deref(), Some("This is the body"));
        assert_eq!(
            msg.footer.as_deref(),
            Some("Reviewed-by: Someone\nCloses #12")
        );
        assert_eq!(msg.footer_line, Some(4));
    }

    #[test]
    fn test_parse_breaking() {
        let msg = CommitMessage::parse("feat(api)!: drop v1 endpoints");
        assert_eq!(msg.type_str(), "feat");
        assert_eq!(msg.subject_str(), "drop v1 endpoints");

        let msg = CommitMessage::parse("feat: change api\n\nBREAKING CHANGE: removed foo");
        assert!(msg.body.is_none());
        assert_eq!(msg.footer.as_deref(), Some("BREAKING CHANGE: removed foo"));
    }

    #[test]
    fn test_parse_non_conventional() {
        let msg = CommitMessage::parse("not a conventional commit");
        assert!(msg.commit_type.is_none());
        assert!(msg.subject.is_none());
        assert_eq!(msg.header, "not a conventional commit");
    }

    #[test]
    fn test_parse_strips_comments() {
        let msg = CommitMessage::parse(
            "feat: add widget\n\n# Please enter the commit message\n# ------------------------ >8 ------------------------\ndiff --git a/x b/x\n",
        );
        assert_eq!(msg.raw, "feat: add widget");
        assert!(msg.body.is_none());
    }

    #[test]
    fn test_parse_empty() {
        let msg = CommitMessage::parse("\n\n");
        assert!(msg.is_empty());
        assert_eq!(msg.type_str(), "");
    }
}
