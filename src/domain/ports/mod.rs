//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_store;
pub mod notifier;
pub mod style_compiler;
pub mod sync_events;

pub use asset_store::{AssetStore, FieldErrors, StoreError, StoreResult};
pub use notifier::{NoopNotifier, Notification, Notifier};
pub use style_compiler::{CompileFailure, CompileOutcome, StyleCompiler};
pub use sync_events::{NoopEventSink, Operation, SyncEvent, SyncEventSink};
