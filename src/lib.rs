// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! monodetect - Monorepo detection
//!
//! Detects whether a directory is the root of a JavaScript-style monorepo,
//! which tool convention it follows, and which packages it declares.
//!
//! # Features
//!
//! - **Tool Detection**: pnpm, Lerna, Turborepo, Nx, Rush and yarn/npm workspaces
//! - **Layout Heuristic**: recognise `packages/` and `apps/` folders without any tooling
//! - **Package Enumeration**: resolve workspace patterns to package names and paths
//!
//! Every lookup is read-only. Missing or malformed files count as absent;
//! only unexpected filesystem failures surface as errors.
//!
//! # Example
//!
//! ```no_run
//! use monodetect::{get_monorepo_packages, is_monorepo};
//! use std::path::Path;
//!
//! let root = Path::new("path/to/repo");
//! if let Some(tool) = is_monorepo(Some(root)).unwrap() {
//!     println!("{} monorepo", tool);
//!     for (name, path) in get_monorepo_packages(Some(root)).unwrap() {
//!         println!("{} -> {}", name, path);
//!     }
//! }
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod monorepo;

// Re-exports for convenience
pub use config::MonodetectConfig;
pub use error::{MonoError, Result};
pub use monorepo::{
    get_monorepo_packages, is_monorepo, is_monorepo_like, MonorepoPackages, MonorepoReport,
    MonorepoTool,
};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of monodetect.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
