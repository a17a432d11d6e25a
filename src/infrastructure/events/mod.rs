//! Event Sink Implementations
//!
//! Provides concrete implementations of SyncEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink lives in `presentation`

mod json;

pub use json::{event_to_json, JsonEventSink};
