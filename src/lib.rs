//! themesync - two-way synchronizer between a local theme directory and a
//! remote asset store
//!
//! Files are downloaded from the store, uploaded to it (compiling `.sass`
//! and `.scss` sources to CSS on the way), removed, replaced wholesale, or
//! mirrored continuously by watching the working directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    FsEvent, FsEventKind, ReplaceConfirmation, ReplaceReport, SyncEngine, SyncReport,
    WatchEvent, WatchMode, WatchOutcome, WatchUseCase,
};
pub use config::{Config, ConfigWarning, CONFIG_FILE};
pub use domain::entities::{Asset, AssetPayload};
pub use domain::value_objects::{AssetKey, ContentKind};
pub use error::{ThemeSyncError, ThemeSyncResult};
