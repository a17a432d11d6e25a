//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `store/` - Asset store clients (HTTP, in-memory)
//! - `compiler/` - Sass/SCSS compiler
//! - `fs/` - Local file system and inventory
//! - `events/` - Sync event sinks

pub mod compiler;
pub mod events;
pub mod fs;
pub mod notifier;
pub mod store;

// Re-export for convenience
pub use compiler::GrassCompiler;
pub use events::JsonEventSink;
pub use fs::{atomic_write, LocalFs, LocalInventory};
pub use notifier::LogNotifier;
pub use store::{HttpAssetStore, InMemoryAssetStore, StoreCall};
