//! Sync Result
//!
//! Result types for sync operations.

use std::fmt;

use crate::domain::ports::{CompileFailure, Operation, StoreError};
use crate::domain::value_objects::KeyError;

/// Why one asset failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Store refused the request or could not be reached
    Store(StoreError),
    /// Style source has a syntax error
    Compile(CompileFailure),
    /// Local read or write failed
    Io(String),
    /// Key is not a valid relative path
    InvalidKey(KeyError),
}

impl FailureReason {
    /// User-facing messages (one per store field for rejected requests)
    pub fn messages(&self) -> Vec<String> {
        match self {
            FailureReason::Store(err) => err.messages(),
            other => vec![other.to_string()],
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Store(err) => write!(f, "{}", err),
            FailureReason::Compile(failure) => write!(f, "{}", failure),
            FailureReason::Io(message) => write!(f, "{}", message),
            FailureReason::InvalidKey(err) => write!(f, "{}", err),
        }
    }
}

/// A failed asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFailure {
    pub key: String,
    pub reason: FailureReason,
}

/// Outcome of one batch, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub operation: Operation,
    /// Keys that reached the store (compiled output keys for style sources)
    pub succeeded: Vec<String>,
    pub failures: Vec<AssetFailure>,
    /// Keys deliberately left alone
    pub skipped: Vec<String>,
}

impl SyncReport {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            succeeded: Vec::new(),
            failures: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of assets looked at
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failures.len() + self.skipped.len()
    }

    pub(crate) fn succeed(&mut self, key: impl Into<String>) {
        self.succeeded.push(key.into());
    }

    pub(crate) fn fail(&mut self, key: impl Into<String>, reason: FailureReason) {
        self.failures.push(AssetFailure {
            key: key.into(),
            reason,
        });
    }

    pub(crate) fn skip(&mut self, key: impl Into<String>) {
        self.skipped.push(key.into());
    }
}

/// Outcome of `replace`: the delete phase, then the upload phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceReport {
    pub removed: SyncReport,
    pub uploaded: SyncReport,
}

impl ReplaceReport {
    pub fn is_success(&self) -> bool {
        self.removed.is_success() && self.uploaded.is_success()
    }
}

/// What the watch state machine did with one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchOutcome {
    /// Event consumed by the ignore registry
    Suppressed,
    /// Created/updated key is not part of the local inventory
    NotInInventory,
    /// Delete observed while remote files are kept
    KeptRemote,
    Uploaded(SyncReport),
    Removed(SyncReport),
}
