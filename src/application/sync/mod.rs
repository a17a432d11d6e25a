//! Sync Use Case
//!
//! `SyncEngine` runs download, upload, replace and remove, and drives the
//! watch state machine one filesystem event at a time.

mod options;
mod result;
mod use_case;


pub use options::{FsEvent, FsEventKind, ReplaceConfirmation, WatchMode};
pub use result::{AssetFailure, FailureReason, ReplaceReport, SyncReport, WatchOutcome};
pub use use_case::SyncEngine;
