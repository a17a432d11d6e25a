//! Watch view

use crossterm::style::Stylize;

use crate::application::FsEventKind;
use crate::application::WatchEvent;

/// Header printed when the watch loop starts
pub fn render_watch_header(root: &str, keep_files: bool) -> String {
    let deletes = if keep_files {
        "kept remotely"
    } else {
        "mirrored"
    };
    format!("Watching: {root}\n  Deletes: {deletes}\n  Press Ctrl+C to stop\n")
}

/// One timestamped line per watch event
pub fn render_watch_event(timestamp: &str, event: &WatchEvent, color: bool) -> String {
    let prefix = format!("[{}]", timestamp);
    let paint = |text: String, dim: bool| {
        if !color {
            text
        } else if dim {
            text.dark_grey().to_string()
        } else {
            text.cyan().to_string()
        }
    };

    match event {
        WatchEvent::WatchStarted { root, keep_files } => {
            format!("{} {}", prefix, render_watch_header(root, *keep_files))
        }
        WatchEvent::FileChanged { key, kind } => {
            let verb = match kind {
                FsEventKind::Created => "Created",
                FsEventKind::Updated => "Changed",
                FsEventKind::Deleted => "Deleted",
            };
            format!("{} {}\n", prefix, paint(format!("{verb}: {key}"), true))
        }
        WatchEvent::Error { message } => {
            let text = format!("Error: {message}");
            let text = if color { text.red().to_string() } else { text };
            format!("{} {}\n", prefix, text)
        }
        WatchEvent::Shutdown => format!("\n{} {}\n", prefix, paint("Watch stopped.".into(), false)),
    }
}
