//! Error types for tallyloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning and counting
#[derive(Error, Debug)]
pub enum TallyError {
    /// Failed to open or read a source file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A directory entry could not be read or descended into
    #[error("failed to read entry '{path}': {message}")]
    DirectoryListing { path: PathBuf, message: String },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Worker pool could not be built
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}
