// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ignore predicates.
//!
//! A message matched by any ignore predicate skips every configured rule and
//! is reported as valid.

mod defaults;
mod pattern;

pub use defaults::{default_ignores, REVERT_PATTERN};
pub use pattern::{IgnoreList, IgnorePredicate, PatternIgnore};
