//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncEngine` - download, upload, replace, remove and the watch state machine
//! - `WatchUseCase` - file watching that feeds the engine
//!
//! ## Services
//!
//! - `StyleStage` - compile style sources and mark their output
//! - `IgnoreRegistry` - one-shot suppression of self-generated events

mod ignore_registry;
mod style;
pub mod sync;
pub mod watch;

pub use ignore_registry::IgnoreRegistry;
pub use style::StyleStage;
pub use sync::{
    AssetFailure, FailureReason, FsEvent, FsEventKind, ReplaceConfirmation, ReplaceReport,
    SyncEngine, SyncReport, WatchMode, WatchOutcome,
};
pub use watch::{WatchEvent, WatchUseCase, WatcherState, DEBOUNCE_MS};
