// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Monorepo root detection.

use crate::error::{MonoError, Result};
use crate::manifest::{presence, PackageManifest};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Folders whose presence suggests a monorepo layout.
pub const CONVENTIONAL_FOLDERS: &[&str] = &["packages", "apps"];

/// Tooling convention a monorepo follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonorepoTool {
    /// pnpm workspaces (`pnpm-workspace.yaml`)
    Pnpm,
    /// Lerna (`lerna.json`)
    Lerna,
    /// Turborepo (`turbo.json`)
    Turbo,
    /// Nx (`nx.json`)
    Nx,
    /// Rush (`rush.json`)
    Rush,
    /// `workspaces` field in the root `package.json`
    Yarn,
}

impl MonorepoTool {
    /// All tools, in detection priority order.
    pub const ALL: [MonorepoTool; 6] = [
        Self::Pnpm,
        Self::Lerna,
        Self::Turbo,
        Self::Nx,
        Self::Rush,
        Self::Yarn,
    ];

    /// The marker file whose presence identifies this tool.
    ///
    /// Yarn has none; it is recognised from the manifest instead.
    pub fn marker_file(&self) -> Option<&'static str> {
        match self {
            Self::Pnpm => Some("pnpm-workspace.yaml"),
            Self::Lerna => Some("lerna.json"),
            Self::Turbo => Some("turbo.json"),
            Self::Nx => Some("nx.json"),
            Self::Rush => Some("rush.json"),
            Self::Yarn => None,
        }
    }

    /// Identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Lerna => "lerna",
            Self::Turbo => "turbo",
            Self::Nx => "nx",
            Self::Rush => "rush",
            Self::Yarn => "yarn",
        }
    }
}

impl fmt::Display for MonorepoTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonorepoTool {
    type Err = MonoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MonoError::WithContext {
                context: "tool".to_string(),
                message: format!("unknown monorepo tool '{}'", s),
            })
    }
}

/// Resolve an optional directory argument, defaulting to the working directory.
pub(crate) fn resolve_dir(dir: Option<&Path>) -> Result<Cow<'_, Path>> {
    match dir {
        Some(dir) => Ok(Cow::Borrowed(dir)),
        None => Ok(Cow::Owned(std::env::current_dir()?)),
    }
}

/// Decide whether `dir` is a monorepo root and which tool it uses.
///
/// Marker files are checked first in [`MonorepoTool::ALL`] order; the
/// first one present wins. Without a marker, a non-empty `workspaces`
/// field in `package.json` means [`MonorepoTool::Yarn`]. A missing or
/// malformed manifest counts as declaring nothing.
pub fn is_monorepo(dir: Option<&Path>) -> Result<Option<MonorepoTool>> {
    let root = resolve_dir(dir)?;

    for tool in MonorepoTool::ALL {
        let Some(marker) = tool.marker_file() else {
            continue;
        };
        if presence::exists(&root.join(marker))? {
            tracing::debug!("Found {} in {:?}, tool is {}", marker, root, tool);
            return Ok(Some(tool));
        }
    }

    if PackageManifest::load(&root)?.has_workspaces() {
        tracing::debug!("Manifest in {:?} declares workspaces", root);
        return Ok(Some(MonorepoTool::Yarn));
    }

    tracing::debug!("No monorepo markers in {:?}", root);
    Ok(None)
}

/// Whether `dir` looks like a monorepo from its folder layout alone.
///
/// True when a `packages` or `apps` directory sits directly inside it.
pub fn is_monorepo_like(dir: Option<&Path>) -> Result<bool> {
    let root = resolve_dir(dir)?;

    for folder in CONVENTIONAL_FOLDERS {
        if presence::is_dir(&root.join(folder))? {
            tracing::debug!("Found conventional folder {}/ in {:?}", folder, root);
            return Ok(true);
        }
    }

    Ok(false)
}
