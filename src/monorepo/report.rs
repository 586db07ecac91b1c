// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Combined monorepo report.

use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::detector::{is_monorepo, is_monorepo_like, resolve_dir, MonorepoTool};
use super::packages::{get_monorepo_packages, MonorepoPackages};

/// Everything known about a directory, gathered in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct MonorepoReport {
    /// Directory that was inspected.
    pub root: PathBuf,
    /// Detected tool, if any.
    pub tool: Option<MonorepoTool>,
    /// Whether the folder layout looks like a monorepo.
    pub looks_like: bool,
    /// Member packages.
    pub packages: MonorepoPackages,
}

impl MonorepoReport {
    /// Inspect `dir` (or the working directory).
    ///
    /// Packages are only enumerated when either detector says yes.
    pub fn inspect(dir: Option<&Path>) -> Result<Self> {
        let root = resolve_dir(dir)?.into_owned();
        let tool = is_monorepo(Some(root.as_path()))?;
        let looks_like = is_monorepo_like(Some(root.as_path()))?;

        let packages = if tool.is_some() || looks_like {
            get_monorepo_packages(Some(root.as_path()))?
        } else {
            MonorepoPackages::new()
        };

        Ok(Self {
            root,
            tool,
            looks_like,
            packages,
        })
    }

    /// Whether the directory is a monorepo by either signal.
    pub fn is_monorepo(&self) -> bool {
        self.tool.is_some() || self.looks_like
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_yarn_workspace() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"workspaces": ["packages/*"]}"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("packages/core")).unwrap();
        fs::write(
            dir.path().join("packages/core/package.json"),
            r#"{"name": "core"}"#,
        )
        .unwrap();

        let report = MonorepoReport::inspect(Some(dir.path())).unwrap();
        assert_eq!(report.tool, Some(MonorepoTool::Yarn));
        assert!(report.looks_like);
        assert!(report.is_monorepo());
        assert_eq!(report.packages["core"], "./packages/core");
    }

    #[test]
    fn test_inspect_plain_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/pkg")).unwrap();
        fs::write(dir.path().join("src/pkg/package.json"), r#"{"name": "x"}"#).unwrap();

        let report = MonorepoReport::inspect(Some(dir.path())).unwrap();
        assert!(!report.is_monorepo());
        assert!(report.packages.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("nx.json"), "{}").unwrap();

        let report = MonorepoReport::inspect(Some(dir.path())).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tool"], "nx");
        assert_eq!(json["looks_like"], false);
        assert!(json["packages"].as_object().unwrap().is_empty());
    }
}
