//! Sync Event Port
//!
//! Provides an observable interface for sync operations.
//! Enables console progress, NDJSON event streams, and tests.

use std::fmt;

use crate::domain::ports::CompileFailure;
use crate::domain::value_objects::ContentKind;

/// Operator-facing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Download,
    Upload,
    Replace,
    Remove,
    Watch,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Download => "download",
            Operation::Upload => "upload",
            Operation::Replace => "replace",
            Operation::Remove => "remove",
            Operation::Watch => "watch",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during sync operations
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// A batch started
    Started {
        operation: Operation,
        asset_count: usize,
    },

    /// Asset written locally
    Downloaded { key: String },

    /// Asset could not be fetched or written
    DownloadFailed { key: String, error: String },

    /// Style source compiled to its output file
    Rendered { source: String, output: String },

    /// Style source has a syntax error
    CompileFailed { key: String, failure: CompileFailure },

    /// Asset accepted by the store
    Uploaded { key: String, kind: ContentKind },

    /// Store refused the asset or could not be reached
    UploadFailed { key: String, errors: Vec<String> },

    /// Asset deleted remotely
    Removed { key: String },

    /// Remote delete failed
    RemoveFailed { key: String, errors: Vec<String> },

    /// Asset skipped without a store call
    Skipped { key: String, reason: String },

    /// Watch event swallowed by the ignore registry
    Suppressed { key: String },

    /// Replace finished both phases
    Replaced { removed: usize, uploaded: usize },

    /// A batch finished
    Completed {
        operation: Operation,
        succeeded: usize,
        failed: usize,
        skipped: usize,
    },
}

impl SyncEvent {
    /// True for events that report a failure
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            SyncEvent::DownloadFailed { .. }
                | SyncEvent::CompileFailed { .. }
                | SyncEvent::UploadFailed { .. }
                | SyncEvent::RemoveFailed { .. }
        )
    }
}

/// Trait for receiving sync events
///
/// Implementations:
/// - `ConsoleEventSink`: colored progress lines
/// - `JsonEventSink`: NDJSON event stream
/// - `NoopEventSink`: silent operation
pub trait SyncEventSink: Send + Sync {
    fn on_event(&self, event: SyncEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}
