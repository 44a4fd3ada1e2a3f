//! File system abstraction port.

use std::path::{Path, PathBuf};

/// Error type for file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// File not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction over file system operations.
///
/// This trait allows faking file system access in tests.
pub trait FileSystem {
    /// Reads a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError>;

    /// Writes bytes to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;
}
