// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for clint.
//!
//! This module handles loading and parsing the commit message policy table,
//! and resolving it against the base rule sets it extends.

pub mod default;
mod loader;
pub mod preset;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
