// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! This module reads the commit messages clint lints: existing commits,
//! commit ranges and the message file of a commit in progress.

mod repo;

pub use repo::{
    edit_message_path, get_commit, get_commit_range, open_repo, read_message_file, Repository,
    EDIT_MESSAGE_FILE,
};
