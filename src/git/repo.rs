// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{ClintError, CommitError, GitError, Result};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::{Path, PathBuf};

/// File git writes the message being committed to.
pub const EDIT_MESSAGE_FILE: &str = "COMMIT_EDITMSG";

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            ClintError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path, searching parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                ClintError::Git(GitError::NotARepository)
            } else {
                ClintError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            ClintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            ClintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the commit message for a reference.
    pub fn get_commit_message(&self, reference: &str) -> Result<String> {
        let commit = self.get_commit(reference)?;
        let message = commit.message().ok_or_else(|| {
            ClintError::Git(GitError::InvalidReference {
                reference: format!("{}: Invalid message encoding", reference),
            })
        })?;
        Ok(message.to_string())
    }

    /// Get commits in a range, oldest first.
    ///
    /// `A..B` lists commits reachable from B but not from A; an empty side
    /// means `HEAD`. Anything else is treated as a single reference.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(Oid, String)>> {
        let Some((from, to)) = range.split_once("..") else {
            let commit = self.get_commit(range)?;
            return Ok(vec![(
                commit.id(),
                commit.message().unwrap_or("").to_string(),
            )]);
        };

        let from = self.get_commit(if from.is_empty() { "HEAD" } else { from })?;
        let to = self.get_commit(if to.is_empty() { "HEAD" } else { to })?;

        let walk_error = |command: &str, e: git2::Error| {
            ClintError::Git(GitError::CommandFailed {
                command: command.to_string(),
                message: e.message().to_string(),
            })
        };

        let mut revwalk = self.inner.revwalk().map_err(|e| walk_error("revwalk", e))?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)
            .map_err(|e| walk_error("revwalk.set_sorting", e))?;
        revwalk
            .push(to.id())
            .map_err(|e| walk_error("revwalk.push", e))?;
        revwalk
            .hide(from.id())
            .map_err(|e| walk_error("revwalk.hide", e))?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| walk_error("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                ClintError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            let message = commit.message().unwrap_or("").to_string();
            commits.push((oid, message));
        }

        Ok(commits)
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Path of the message file for the commit in progress.
    pub fn edit_message_path(&self) -> PathBuf {
        self.git_dir().join(EDIT_MESSAGE_FILE)
    }
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Get the full SHA and message of a commit.
pub fn get_commit(reference: &str) -> Result<(String, String)> {
    let repo = Repository::open_current()?;
    let message = repo.get_commit_message(reference)?;
    let sha = repo.get_commit(reference)?.id().to_string();
    Ok((sha, message))
}

/// Get commits in a range.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open_current()?;
    let commits = repo.get_commits_in_range(range)?;
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| (oid.to_string(), msg))
        .collect())
}

/// Path of `COMMIT_EDITMSG` in the current repository.
pub fn edit_message_path() -> Result<PathBuf> {
    Ok(Repository::open_current()?.edit_message_path())
}

/// Read a commit message file.
pub fn read_message_file(path: &Path) -> Result<String> {
    tracing::debug!("Reading commit message from: {:?}", path);

    std::fs::read_to_string(path).map_err(|e| {
        ClintError::Commit(CommitError::ReadFailed {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn commit(repo: &Git2Repo, message: &str) -> Oid {
        let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = {
            let mut index = repo.index().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    fn create_test_repo(messages: &[&str]) -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        for message in messages {
            commit(&repo, message);
        }

        let wrapper = Repository::open(dir.path()).unwrap();
        (dir, wrapper)
    }

    #[test]
    fn test_open_repo() {
        let (dir, _repo) = create_test_repo(&["chore: init"]);
        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(ClintError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_get_commit_message() {
        let (_dir, repo) = create_test_repo(&["chore: init", "feat: add widget"]);
        assert_eq!(repo.get_commit_message("HEAD").unwrap(), "feat: add widget");
        assert_eq!(repo.get_commit_message("HEAD~1").unwrap(), "chore: init");
    }

    #[test]
    fn test_invalid_reference() {
        let (_dir, repo) = create_test_repo(&["chore: init"]);
        assert!(matches!(
            repo.get_commit_message("no-such-ref"),
            Err(ClintError::Git(GitError::InvalidReference { .. }))
        ));
    }

    #[test]
    fn test_range_is_oldest_first() {
        let (_dir, repo) = create_test_repo(&["chore: init", "feat: one", "fix: two"]);
        let commits = repo.get_commits_in_range("HEAD~2..HEAD").unwrap();
        let messages: Vec<&str> = commits.iter().map(|(_, m)| m.as_str()).collect();
        assert_eq!(messages, vec!["feat: one", "fix: two"]);
    }

    #[test]
    fn test_range_open_end_defaults_to_head() {
        let (_dir, repo) = create_test_repo(&["chore: init", "feat: one"]);
        assert_eq!(repo.get_commits_in_range("HEAD~1..").unwrap().len(), 1);
    }

    #[test]
    fn test_single_reference_range() {
        let (_dir, repo) = create_test_repo(&["chore: init"]);
        assert_eq!(repo.get_commits_in_range("HEAD").unwrap().len(), 1);
    }

    #[test]
    fn test_edit_message_path() {
        let (_dir, repo) = create_test_repo(&["chore: init"]);
        let path = repo.edit_message_path();
        assert!(path.ends_with(".git/COMMIT_EDITMSG"));
    }

    #[test]
    fn test_read_message_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_message_file(&dir.path().join("nope")),
            Err(ClintError::Commit(CommitError::ReadFailed { .. }))
        ));
    }
}
