//! Configuration loading errors.
//!
//! Visibility resolution itself cannot fail; only reading menus and rules
//! from disk can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading menu or rule files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is {size} bytes, larger than the {limit} byte limit", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Result type alias using LoadError.
pub type LoadResult<T> = Result<T, LoadError>;
