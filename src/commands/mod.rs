//! Command handlers for the themesync binary

pub mod configure;
mod context;
pub mod sync;
pub mod watch;

/// Output settings shared by every command
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// NDJSON events on stdout
    pub json: bool,
    /// ANSI colors on console lines
    pub color: bool,
}
