//! Reusable theme content and test doubles.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use themesync::domain::ports::{SyncEvent, SyncEventSink};

pub const LAYOUT_LIQUID: &str = "<html>\n  {{ content_for_layout }}\n</html>\n";

pub const THEME_SCSS: &str = "$accent: #ff0000;\n.button {\n  color: $accent;\n}\n";

pub const BROKEN_SCSS: &str = ".button {\n  color: red;\n  width: $missing;\n}\n";

/// First bytes of a PNG file
pub const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0x0d];

pub fn write_file(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub fn keys(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Collects every event in order
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SyncEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<SyncEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl SyncEventSink for RecordingSink {
    fn on_event(&self, event: SyncEvent) {
        self.events.lock().unwrap().push(event);
    }
}
