// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for monodetect.
//!
//! Configuration only affects the command-line front end; the detection
//! functions themselves take no settings.

pub mod default;
mod loader;
mod schema;

pub use loader::{
    find_config_file, find_config_file_from, load_config, parse_config, search_paths,
};
pub use schema::*;
