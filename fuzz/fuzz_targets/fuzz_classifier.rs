#![no_main]

use libfuzzer_sys::fuzz_target;
use themesync::domain::services::{classify, encode_for_upload};
use themesync::{AssetKey, AssetPayload};

fuzz_target!(|data: &[u8]| {
    let _ = classify(data);

    // Text payloads never keep a carriage return
    if let Ok(key) = AssetKey::new("templates/fuzz.liquid") {
        if let AssetPayload::Text(text) = encode_for_upload(&key, data.to_vec()) {
            assert!(!text.contains('\r'));
        }
    }
});
