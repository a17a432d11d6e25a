//! Presentation Layer
//!
//! This layer handles:
//! - Console rendering of sync events
//! - Watch loop output
//! - Terminal color detection
//!
//! NDJSON output lives in `infrastructure::events`.

mod console;
mod terminal;
pub mod watch;

pub use console::{ConsoleEventSink, Stream};
pub use terminal::{use_color, ColorWhen};
