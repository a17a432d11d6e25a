//! Console Event Sink
//!
//! Human-readable progress lines for sync events. Failures go to stderr and
//! are always shown; everything else goes to stdout and is hidden by
//! `--quiet`.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::domain::ports::{SyncEvent, SyncEventSink};

/// Where a rendered line goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Colored (or plain) progress lines on the terminal
#[derive(Debug, Clone, Copy)]
pub struct ConsoleEventSink {
    color: bool,
    quiet: bool,
}

impl ConsoleEventSink {
    pub fn new(color: bool, quiet: bool) -> Self {
        Self { color, quiet }
    }

    /// Line for `event`, or `None` when nothing should be printed
    pub fn render(&self, event: &SyncEvent) -> Option<(Stream, String)> {
        match event {
            SyncEvent::Started { .. } => None,
            SyncEvent::Downloaded { key } => {
                self.success(format!("Downloaded: {key}"), Color::Green)
            }
            SyncEvent::DownloadFailed { key, error } => {
                self.failure(format!("Download error: {key} - {error}"))
            }
            SyncEvent::Rendered { source, output } => {
                self.success(format!("Rendered SASS: {source} => {output}"), Color::Magenta)
            }
            SyncEvent::CompileFailed { failure, .. } => self.failure(failure.to_string()),
            SyncEvent::Uploaded { key, .. } => {
                self.success(format!("Uploaded: {key}"), Color::Green)
            }
            SyncEvent::UploadFailed { key, errors } => {
                self.failure(format!("Upload error: {key} - {}", errors.join("; ")))
            }
            SyncEvent::Removed { key } => self.success(format!("Removed: {key}"), Color::Green),
            SyncEvent::RemoveFailed { key, errors } => self.failure(format!(
                "Error: Could not remove {key} - {}",
                errors.join("; ")
            )),
            SyncEvent::Skipped { key, reason } => {
                self.success(format!("Skipped: {key} ({reason})"), Color::DarkGrey)
            }
            SyncEvent::Suppressed { key } => {
                self.success(format!("Ignored: {key}"), Color::DarkGrey)
            }
            SyncEvent::Replaced { removed, uploaded } => self.success(
                format!("Replaced: {removed} removed, {uploaded} uploaded"),
                Color::Green,
            ),
            SyncEvent::Completed { failed, .. } => {
                let color = if *failed == 0 {
                    Color::Green
                } else {
                    Color::Yellow
                };
                self.success("Done.".to_string(), color)
            }
        }
    }

    fn success(&self, text: String, color: Color) -> Option<(Stream, String)> {
        if self.quiet {
            return None;
        }
        Some((Stream::Stdout, self.paint(text, color)))
    }

    fn failure(&self, text: String) -> Option<(Stream, String)> {
        Some((Stream::Stderr, self.paint(text, Color::Red)))
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text
        }
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        match self.render(&event) {
            Some((Stream::Stdout, line)) => {
                let _ = writeln!(io::stdout(), "{line}");
            }
            Some((Stream::Stderr, line)) => {
                let _ = writeln!(io::stderr(), "{line}");
            }
            None => {}
        }
    }
}
