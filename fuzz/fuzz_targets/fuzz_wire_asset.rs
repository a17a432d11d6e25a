#![no_main]

use libfuzzer_sys::fuzz_target;
use themesync::infrastructure::store::wire::WireAsset;

fuzz_target!(|data: &[u8]| {
    // Fuzz store responses - decoding should never panic
    if let Ok(wire) = serde_json::from_slice::<WireAsset>(data) {
        let _ = wire.into_asset();
    }
});
