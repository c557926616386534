//! Error types for the file layer.

use gnorm_core::NormalizeError;
use std::path::PathBuf;
use thiserror::Error;

/// Every variant is fatal for the batch it occurs in.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("output path for {path:?} would equal the input path (no {suffix:?} to replace)")]
    OutputPathCollision { path: PathBuf, suffix: String },

    #[error("path {0:?} is not valid UTF-8")]
    NonUtf8Path(PathBuf),

    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to normalize {path:?}")]
    Normalize {
        path: PathBuf,
        #[source]
        source: NormalizeError,
    },
}
