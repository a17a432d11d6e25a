#![no_main]

use libfuzzer_sys::fuzz_target;
use themesync::AssetKey;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Valid keys never escape the root
        if let Ok(key) = AssetKey::new(raw) {
            assert!(!key.as_str().split('/').any(|segment| segment == ".."));
            assert!(!key.as_str().starts_with('/'));
        }
    }
});
