#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // install.toml parsing - this should never panic
        let _ = mindsystem_install::config::parse_layout(
            content,
            std::path::Path::new("install.toml"),
        );
    }
});
