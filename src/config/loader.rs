// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, MonoError, Result};
use crate::manifest::presence;
use std::path::{Path, PathBuf};

use super::schema::MonodetectConfig;

/// File names looked up in the working directory and each of its ancestors,
/// then in the home directory.
const CONFIG_FILES: &[&str] = &[
    "monodetect.toml",
    ".monodetect.toml",
    ".config/monodetect.toml",
];

/// Every location a configuration file may live, most specific first.
pub fn search_paths(start_dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = start_dir
        .ancestors()
        .chain(dirs::home_dir().as_deref())
        .flat_map(|dir| CONFIG_FILES.iter().map(move |name| dir.join(name)))
        .collect();

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("monodetect").join("config.toml"));
    }

    paths
}

/// Find the configuration file for the current directory.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the first configuration file in [`search_paths`].
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    search_paths(start_dir).into_iter().find(|path| path.is_file())
}

/// Load configuration from the default locations, or defaults if there is none.
pub fn load_config() -> Result<MonodetectConfig> {
    let Some(path) = find_config_file() else {
        tracing::debug!("No configuration file found, using defaults");
        return Ok(MonodetectConfig::default());
    };
    load_config_from(&path)
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<MonodetectConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    match presence::read_if_file(path)? {
        Some(content) => parse_config(&content),
        None => Err(MonoError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        })),
    }
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<MonodetectConfig> {
    toml::from_str(content).map_err(|e| {
        MonoError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}
