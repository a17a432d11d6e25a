//! Watch Use Case
//!
//! Continuous file watching that keeps the remote store in step with the
//! working directory. It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default, coalesced per key)
//! - The engine's watch state machine for each settled change
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(&engine, WatchMode::MirrorDeletes);
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod use_case;


pub use event::{changes_from, WatchEvent, WatcherState, DEBOUNCE_MS};
pub use use_case::WatchUseCase;
