//! Application error types

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::{CodecError, FileSystemError};

/// Application-level errors.
///
/// Only boundary failures live here. Problems inside the document are
/// absorbed by the transformer and reported as warnings.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Reading or writing a file failed.
    #[error("file system error: {0}")]
    FileSystem(#[from] FileSystemError),

    /// The input could not be decoded or the output could not be encoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The output file name cannot be derived from the input path.
    #[error("cannot derive an output path from {}; choose one explicitly", .0.display())]
    OutputPath(PathBuf),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
