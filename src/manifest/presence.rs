// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Filesystem checks that treat "not there" as a value, not an error.

use crate::error::Result;
use std::fs::{self, Metadata};
use std::io::ErrorKind;
use std::path::Path;

/// Stat a path, mapping "not found" style failures to `None`.
///
/// A path component that is a regular file (`ENOTDIR`) counts as absent
/// too. Anything else, such as permission denied, is returned as an error.
pub fn metadata(path: &Path) -> Result<Option<Metadata>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if is_absent(e.kind()) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Whether anything exists at `path`.
pub fn exists(path: &Path) -> Result<bool> {
    Ok(metadata(path)?.is_some())
}

/// Whether `path` exists and is a directory.
pub fn is_dir(path: &Path) -> Result<bool> {
    Ok(metadata(path)?.is_some_and(|m| m.is_dir()))
}

/// Read a file to a string, or `None` if there is no regular file there
/// or its content is not UTF-8.
pub fn read_if_file(path: &Path) -> Result<Option<String>> {
    match metadata(path)? {
        Some(meta) if meta.is_file() => {}
        _ => return Ok(None),
    }

    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        // Removed between the stat and the read.
        Err(e) if is_absent(e.kind()) => Ok(None),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            tracing::debug!("Ignoring {:?}: not valid UTF-8", path);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn is_absent(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::NotFound | ErrorKind::NotADirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_path_is_absent() {
        let dir = TempDir::new().unwrap();
        assert!(!exists(&dir.path().join("nope")).unwrap());
        assert!(read_if_file(&dir.path().join("nope")).unwrap().is_none());
    }

    #[test]
    fn test_path_through_file_is_absent() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, "x").unwrap();

        assert!(!exists(&file.join("package.json")).unwrap());
        assert!(!is_dir(&file).unwrap());
    }

    #[test]
    fn test_read_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("package.json")).unwrap();

        assert!(exists(&dir.path().join("package.json")).unwrap());
        assert!(read_if_file(&dir.path().join("package.json"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_read_invalid_utf8_is_absent() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("package.json");
        fs::write(&file, [0xff, 0xfe, 0x00]).unwrap();

        assert!(read_if_file(&file).unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_propagates() {
        use crate::error::MonoError;
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("package.json"), "{}").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits; nothing to check there.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let stat = metadata(&locked.join("package.json"));
        let read = read_if_file(&locked.join("package.json"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        for result in [stat.map(|_| ()), read.map(|_| ())] {
            match result {
                Err(MonoError::Io(e)) => assert_eq!(e.kind(), ErrorKind::PermissionDenied),
                other => panic!("expected permission error, got {:?}", other),
            }
        }
    }
}
