//! Error types for themesync
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::domain::value_objects::{IgnoreError, KeyError};

/// Result type alias for themesync operations
pub type ThemeSyncResult<T> = Result<T, ThemeSyncError>;

/// Main error type for themesync operations
#[derive(Error, Debug)]
pub enum ThemeSyncError {
    /// Configuration file does not exist
    #[error("config file not found: {path} (run `themesync configure` first)")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A required credential is empty or missing
    #[error("missing '{field}' in config")]
    MissingCredential { field: &'static str },

    /// `ignore_files` could not be compiled
    #[error("invalid ignore_files in config: {0}")]
    IgnorePatterns(#[from] IgnoreError),

    /// Refusing to overwrite an existing config file
    #[error("config file already exists: {path} (use --force to overwrite)")]
    ConfigExists { path: PathBuf },

    /// An asset key failed validation
    #[error("invalid asset key '{key}': {source}")]
    InvalidKey { key: String, source: KeyError },

    /// Remote store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File watcher could not be set up
    #[error("watcher error: {0}")]
    Watch(String),

    /// `replace` was invoked without a confirmation token
    #[error("replace aborted: confirmation required")]
    ReplaceNotConfirmed,
}
