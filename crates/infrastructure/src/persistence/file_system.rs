//! Real file system implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use postenv_application::ports::{FileSystem, FileSystemError};
use tracing::debug;

/// Real file system implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Creates a new `StdFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn classify(path: &Path, e: std::io::Error) -> FileSystemError {
    match e.kind() {
        ErrorKind::NotFound => FileSystemError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => FileSystemError::PermissionDenied(path.to_path_buf()),
        _ => FileSystemError::Io(e),
    }
}

impl FileSystem for StdFileSystem {
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        debug!(path = %path.display(), "reading file");
        fs::read_to_string(path).map_err(|e| classify(path, e))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        debug!(path = %path.display(), bytes = contents.len(), "writing file");
        fs::write(path, contents).map_err(|e| classify(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
