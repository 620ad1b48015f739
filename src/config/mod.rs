// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for prtitle.
//!
//! This module handles loading, parsing, and merging validation options from
//! configuration files and command-line overrides.

pub mod default;
mod loader;
mod schema;

pub use default::example_config;
pub use loader::{find_config_file, find_config_file_from, load_config, merge_options, parse_config};
pub use schema::*;
