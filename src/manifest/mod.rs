// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Package manifest and workspace file parsing.
//!
//! Both loaders are forgiving: a missing or malformed file produces an
//! empty record. Only unexpected filesystem failures are returned as errors.

pub(crate) mod presence;

use crate::error::Result;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

/// File name of a package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// File name of the pnpm workspace configuration.
pub const PNPM_WORKSPACE_FILE: &str = "pnpm-workspace.yaml";

/// The fields of a `package.json` that monorepo detection cares about.
///
/// Both fields are read leniently: a value of the wrong type is treated as
/// absent instead of failing the whole manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Package name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    /// Workspace declaration (npm, yarn and friends).
    #[serde(default, deserialize_with = "lenient_workspaces")]
    pub workspaces: Option<WorkspacesField>,
}

/// The `workspaces` field, which comes in two shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspacesField {
    /// `"workspaces": ["packages/*"]`
    Array(Vec<String>),
    /// `"workspaces": { "packages": ["packages/*"], "nohoist": [...] }`
    Object { packages: Vec<String> },
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

fn lenient_workspaces<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<WorkspacesField>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(WorkspacesField::Array(string_items(&items))),
        Value::Object(map) => Some(WorkspacesField::Object {
            packages: map
                .get("packages")
                .and_then(Value::as_array)
                .map(|items| string_items(items))
                .unwrap_or_default(),
        }),
        _ => None,
    };
    Ok(field)
}

/// String elements of a JSON array; anything else is dropped.
fn string_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

impl PackageManifest {
    /// Load the manifest in `dir`, or an empty one if absent or malformed.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let Some(content) = presence::read_if_file(&path)? else {
            tracing::trace!("No manifest at {:?}", path);
            return Ok(Self::default());
        };

        Ok(Self::parse(&content).unwrap_or_else(|e| {
            tracing::debug!("Ignoring malformed manifest {:?}: {}", path, e);
            Self::default()
        }))
    }

    /// Parse manifest JSON.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// The declared name, if present and non-empty.
    pub fn package_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Workspace patterns from the array form, else the object form.
    pub fn workspace_patterns(&self) -> Vec<String> {
        match &self.workspaces {
            Some(WorkspacesField::Array(patterns)) => patterns.clone(),
            Some(WorkspacesField::Object { packages }) => packages.clone(),
            None => Vec::new(),
        }
    }

    /// Whether the manifest declares at least one workspace pattern.
    pub fn has_workspaces(&self) -> bool {
        match &self.workspaces {
            Some(WorkspacesField::Array(patterns)) => !patterns.is_empty(),
            Some(WorkspacesField::Object { packages }) => !packages.is_empty(),
            None => false,
        }
    }
}

/// Contents of `pnpm-workspace.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PnpmWorkspace {
    /// Package glob patterns.
    #[serde(default)]
    pub packages: Vec<String>,
}

impl PnpmWorkspace {
    /// Load the workspace file in `dir`, or an empty one if absent or malformed.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(PNPM_WORKSPACE_FILE);
        let Some(content) = presence::read_if_file(&path)? else {
            return Ok(Self::default());
        };

        Ok(Self::parse(&content).unwrap_or_else(|e| {
            tracing::debug!("Ignoring malformed workspace file {:?}: {}", path, e);
            Self::default()
        }))
    }

    /// Parse workspace YAML.
    pub fn parse(content: &str) -> serde_yaml::Result<Self> {
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_workspaces_array() {
        let manifest = PackageManifest::parse(r#"{"workspaces": ["packages/*"]}"#).unwrap();
        assert_eq!(manifest.workspace_patterns(), vec!["packages/*"]);
        assert!(manifest.has_workspaces());
    }

    #[test]
    fn test_workspaces_object() {
        let manifest = PackageManifest::parse(
            r#"{"workspaces": {"packages": ["apps/*", "libs/*"], "nohoist": ["**/react"]}}"#,
        )
        .unwrap();
        assert_eq!(manifest.workspace_patterns(), vec!["apps/*", "libs/*"]);
        assert!(manifest.has_workspaces());
    }

    #[test]
    fn test_workspaces_empty_forms() {
        let manifest = PackageManifest::parse(r#"{"workspaces": []}"#).unwrap();
        assert!(!manifest.has_workspaces());

        let manifest = PackageManifest::parse(r#"{"workspaces": {"nohoist": []}}"#).unwrap();
        assert!(!manifest.has_workspaces());
        assert!(manifest.workspace_patterns().is_empty());
    }

    #[test]
    fn test_workspaces_unsupported_shape_keeps_name() {
        let manifest =
            PackageManifest::parse(r#"{"name": "root", "workspaces": "packages/*"}"#).unwrap();
        assert_eq!(manifest.package_name(), Some("root"));
        assert!(!manifest.has_workspaces());
    }

    #[test]
    fn test_non_string_name_keeps_workspaces() {
        let manifest =
            PackageManifest::parse(r#"{"name": 42, "workspaces": ["libs/*"]}"#).unwrap();
        assert_eq!(manifest.package_name(), None);
        assert_eq!(manifest.workspace_patterns(), vec!["libs/*"]);
        assert!(manifest.has_workspaces());
    }

    #[test]
    fn test_workspaces_keep_string_elements() {
        let manifest =
            PackageManifest::parse(r#"{"workspaces": ["libs/*", null, 7, "apps/*"]}"#).unwrap();
        assert_eq!(manifest.workspace_patterns(), vec!["libs/*", "apps/*"]);

        let manifest =
            PackageManifest::parse(r#"{"workspaces": {"packages": [false, "tools/*"]}}"#)
                .unwrap();
        assert_eq!(manifest.workspace_patterns(), vec!["tools/*"]);
    }

    #[test]
    fn test_workspaces_only_non_strings_declares_nothing() {
        let manifest = PackageManifest::parse(r#"{"workspaces": [null, 1]}"#).unwrap();
        assert!(!manifest.has_workspaces());
    }

    #[test]
    fn test_empty_name_is_none() {
        let manifest = PackageManifest::parse(r#"{"name": ""}"#).unwrap();
        assert_eq!(manifest.package_name(), None);
    }

    #[test]
    fn test_load_missing_and_malformed() {
        let dir = TempDir::new().unwrap();
        let manifest = PackageManifest::load(dir.path()).unwrap();
        assert!(manifest.name.is_none());

        fs::write(dir.path().join(MANIFEST_FILE), "{ not json").unwrap();
        let manifest = PackageManifest::load(dir.path()).unwrap();
        assert!(manifest.name.is_none());
        assert!(!manifest.has_workspaces());
    }

    #[test]
    fn test_pnpm_workspace_parse() {
        let ws = PnpmWorkspace::parse("packages:\n  - 'packages/*'\n  - 'tools/*'\n").unwrap();
        assert_eq!(ws.packages, vec!["packages/*", "tools/*"]);
    }

    #[test]
    fn test_pnpm_workspace_load_malformed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PNPM_WORKSPACE_FILE), "packages: [unclosed").unwrap();
        let ws = PnpmWorkspace::load(dir.path()).unwrap();
        assert!(ws.packages.is_empty());
    }
}
