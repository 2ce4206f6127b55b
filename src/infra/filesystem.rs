//! Filesystem operations
//!
//! Handles file and directory operations, and the [`FileStore`] seam used
//! by production cleanup.

use glob::MatchOptions;
use std::path::{Path, PathBuf};

use crate::error::FilesystemError;

/// Shell-style matching: wildcards never cross `/` or match a leading `.`
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Glob matching and deletion
pub trait FileStore {
    /// Files matching `pattern`, sorted; empty when nothing matches
    fn match_glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FilesystemError>;

    /// Delete a single file
    fn delete(&self, path: &Path) -> Result<(), FilesystemError>;
}

/// [`FileStore`] over the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
    fn match_glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FilesystemError> {
        let entries =
            glob::glob_with(pattern, MATCH_OPTIONS).map_err(|e| FilesystemError::InvalidPattern {
                pattern: pattern.to_string(),
                error: e.to_string(),
            })?;

        let mut files = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!("Skipping unreadable path: {e}"),
            }
        }

        files.sort();
        Ok(files)
    }

    fn delete(&self, path: &Path) -> Result<(), FilesystemError> {
        std::fs::remove_file(path).map_err(|e| FilesystemError::RemoveFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }
}

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Write bytes to a file, creating parent directories
pub fn write_file(path: &Path, content: &[u8]) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
