#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz config.yml parsing - this should never panic
        let _ = themesync::config::parse_with_warnings(content, Path::new("config.yml"));
    }
});
