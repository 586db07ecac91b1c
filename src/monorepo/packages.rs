// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Workspace package enumeration.

use crate::error::Result;
use crate::manifest::{presence, PackageManifest, PnpmWorkspace};
use indexmap::IndexMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::detector::{resolve_dir, CONVENTIONAL_FOLDERS};

/// Package name to `./`-prefixed relative path, in discovery order.
///
/// A name seen again keeps its original position but takes the newer path.
pub type MonorepoPackages = IndexMap<String, String>;

/// Enumerate the member packages of the monorepo rooted at `dir`.
///
/// Patterns come from the first source that yields any: the manifest
/// `workspaces` field, then `pnpm-workspace.yaml`, then the `packages/`
/// and `apps/` folders. Each pattern is expanded one level deep. When two
/// packages share a name, the one found last wins.
pub fn get_monorepo_packages(dir: Option<&Path>) -> Result<MonorepoPackages> {
    let root = resolve_dir(dir)?;
    let patterns = collect_patterns(&root)?;

    let mut packages = MonorepoPackages::new();
    for pattern in &patterns {
        expand_pattern(&root, pattern, &mut packages)?;
    }

    tracing::debug!("Found {} packages in {:?}", packages.len(), root);
    Ok(packages)
}

/// Gather workspace patterns from the first source that has any.
pub fn collect_patterns(root: &Path) -> Result<Vec<String>> {
    let mut patterns = PackageManifest::load(root)?.workspace_patterns();
    if !patterns.is_empty() {
        tracing::debug!("Using manifest workspaces: {:?}", patterns);
        return Ok(patterns);
    }

    patterns.extend(PnpmWorkspace::load(root)?.packages);
    if !patterns.is_empty() {
        tracing::debug!("Using pnpm workspace packages: {:?}", patterns);
        return Ok(patterns);
    }

    for folder in CONVENTIONAL_FOLDERS {
        if presence::is_dir(&root.join(folder))? {
            patterns.push(format!("{}/*", folder));
        }
    }
    tracing::debug!("Using conventional folders: {:?}", patterns);

    Ok(patterns)
}

/// Base directory of a pattern: everything before the first `*`.
///
/// Only `<base>/*` is really supported; other glob syntax degrades to
/// whatever precedes the wildcard. A leading `./` or `/` is dropped so
/// the base always resolves under the root.
fn pattern_base(pattern: &str) -> String {
    let (base, wildcard) = match pattern.find('*') {
        Some(idx) => (&pattern[..idx], true),
        None => (pattern, false),
    };
    let base = base.trim_start_matches("./").trim_start_matches('/');

    // A bare directory name lists that directory's children.
    if wildcard || base.is_empty() || base.ends_with('/') || base.ends_with('\\') {
        base.to_string()
    } else {
        format!("{}/", base)
    }
}

/// Expand one pattern into `packages`.
fn expand_pattern(root: &Path, pattern: &str, packages: &mut MonorepoPackages) -> Result<()> {
    let base = pattern_base(pattern);
    let base_dir = root.join(&base);

    if !presence::is_dir(&base_dir)? {
        tracing::debug!("Skipping pattern {:?}: {:?} is not a directory", pattern, base_dir);
        return Ok(());
    }

    let read_dir = match fs::read_dir(&base_dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        entries.push(entry?.file_name());
    }
    entries.sort();

    for entry in entries {
        let manifest = PackageManifest::load(&base_dir.join(&entry))?;
        let Some(name) = manifest.package_name() else {
            tracing::trace!("Skipping {:?}{:?}: no package name", base, entry);
            continue;
        };

        let path = relative_path(&base, &entry.to_string_lossy());
        if let Some(previous) = packages.insert(name.to_string(), path.clone()) {
            tracing::debug!("Package {} at {} replaces {}", name, path, previous);
        }
    }

    Ok(())
}

/// `./<base><entry>` with forward slashes only.
fn relative_path(base: &str, entry: &str) -> String {
    format!("./{}{}", base, entry).replace('\\', "/")
}
