//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for CI/automation consumption.

use crate::domain::ports::{SyncEvent, SyncEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON value for one event
pub fn event_to_json(event: &SyncEvent) -> serde_json::Value {
    match event {
        SyncEvent::Started {
            operation,
            asset_count,
        } => serde_json::json!({
            "event": "start",
            "command": operation.as_str(),
            "asset_count": asset_count,
        }),

        SyncEvent::Downloaded { key } => serde_json::json!({
            "event": "downloaded",
            "key": key,
        }),

        SyncEvent::DownloadFailed { key, error } => serde_json::json!({
            "event": "download_error",
            "key": key,
            "error": error,
        }),

        SyncEvent::Rendered { source, output } => serde_json::json!({
            "event": "rendered",
            "source": source,
            "output": output,
        }),

        SyncEvent::CompileFailed { key, failure } => serde_json::json!({
            "event": "compile_error",
            "key": key,
            "filename": failure.filename,
            "line": failure.line,
            "message": failure.message,
        }),

        SyncEvent::Uploaded { key, kind } => serde_json::json!({
            "event": "uploaded",
            "key": key,
            "kind": kind,
        }),

        SyncEvent::UploadFailed { key, errors } => serde_json::json!({
            "event": "upload_error",
            "key": key,
            "errors": errors,
        }),

        SyncEvent::Removed { key } => serde_json::json!({
            "event": "removed",
            "key": key,
        }),

        SyncEvent::RemoveFailed { key, errors } => serde_json::json!({
            "event": "remove_error",
            "key": key,
            "errors": errors,
        }),

        SyncEvent::Skipped { key, reason } => serde_json::json!({
            "event": "skipped",
            "key": key,
            "reason": reason,
        }),

        SyncEvent::Suppressed { key } => serde_json::json!({
            "event": "suppressed",
            "key": key,
        }),

        SyncEvent::Replaced { removed, uploaded } => serde_json::json!({
            "event": "replaced",
            "removed": removed,
            "uploaded": uploaded,
        }),

        SyncEvent::Completed {
            operation,
            succeeded,
            failed,
            skipped,
        } => {
            let status = if *failed == 0 { "success" } else { "partial" };
            serde_json::json!({
                "event": "complete",
                "command": operation.as_str(),
                "status": status,
                "succeeded": succeeded,
                "failed": failed,
                "skipped": skipped,
            })
        }
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        self.write_event(event_to_json(&event));
    }
}
