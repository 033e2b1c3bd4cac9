//! Filesystem Utilities.
//!
//! Helpers for the few filesystem operations Tokensmith performs: creating
//! the export and log directories, and reading/writing whole text files.
//! Failures are reported as [`CoreError::Filesystem`] carrying the path.

use crate::error::CoreError;
use std::fs;
use std::path::Path;

/// Ensures that a directory exists at the given path, creating parents as needed.
///
/// # Errors
///
/// Fails when the path exists but is not a directory, or when creation fails.
///
/// # Examples
///
/// ```no_run
/// # use tokensmith_core::utils::fs::ensure_dir_exists;
/// # use tempfile::tempdir;
/// let temp_dir = tempdir().unwrap();
/// let dir_path = temp_dir.path().join("exports");
/// ensure_dir_exists(&dir_path).unwrap();
/// assert!(dir_path.is_dir());
/// ```
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if path.is_dir() {
            Ok(())
        } else {
            Err(CoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "Path exists but is not a directory",
                ),
            })
        }
    } else {
        fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Reads the entire contents of a file into a string.
pub fn read_to_string(path: &Path) -> Result<String, CoreError> {
    fs::read_to_string(path).map_err(|e| CoreError::Filesystem {
        message: "Failed to read file to string".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes a string to a file, creating or truncating it.
///
/// The parent directory must already exist; see [`ensure_dir_exists`].
pub fn write_string_to_file(path: &Path, content: &str) -> Result<(), CoreError> {
    fs::write(path, content).map_err(|e| CoreError::Filesystem {
        message: "Failed to write string to file".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_ensure_dir_exists_creates_nested_directories() {
        let temp_root = tempdir().expect("temp root");
        let nested = temp_root.path().join("parent_dir/child_dir");

        ensure_dir_exists(&nested).expect("nested dirs created");
        assert!(nested.is_dir());
        // A second call on an existing directory is a no-op.
        ensure_dir_exists(&nested).expect("existing dir accepted");
    }

    #[test]
    fn test_ensure_dir_exists_rejects_file() {
        let file = NamedTempFile::new().expect("temp file");
        match ensure_dir_exists(file.path()) {
            Err(CoreError::Filesystem { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("Expected Filesystem error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_root = tempdir().expect("temp root");
        let path = temp_root.path().join("design-tokens.css");

        write_string_to_file(&path, ":root {\n}").expect("write");
        assert_eq!(read_to_string(&path).expect("read"), ":root {\n}");

        write_string_to_file(&path, "$a: 1;\n").expect("overwrite");
        assert_eq!(read_to_string(&path).expect("read"), "$a: 1;\n");
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let temp_root = tempdir().expect("temp root");
        let missing = temp_root.path().join("missing.json");
        match read_to_string(&missing) {
            Err(CoreError::Filesystem { path, source, .. }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Filesystem error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_root = tempdir().expect("temp root");
        let path = temp_root.path().join("no/such/dir/out.scss");
        assert!(matches!(write_string_to_file(&path, "x"), Err(CoreError::Filesystem { .. })));
    }
}
