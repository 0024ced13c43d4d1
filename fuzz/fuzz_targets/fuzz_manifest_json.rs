#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Manifest parsing - this should never panic
        let _ = mindsystem_install::infrastructure::repositories::from_json(content);
    }
});
