#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    let Some((selector, payload)) = data.split_first() else {
        return;
    };

    let suffix = match selector % 4 {
        0 => ".toml",
        1 => ".json",
        2 => ".txt",
        _ => "",
    };

    let payload = payload.get(..1_000_000).unwrap_or(payload);
    let Ok(mut file) = tempfile::Builder::new().suffix(suffix).tempfile() else {
        return;
    };
    if file.write_all(payload).is_err() {
        return;
    }

    let result = fuzz_ab::config::load_requests(file.path(), &[], None);
    if let Ok(templates) = result {
        debug_assert!(suffix == ".toml" || suffix == ".json");
        debug_assert!(!templates.is_empty());
        for template in &templates {
            debug_assert!(template.repetitions >= 1);
            debug_assert!(template.delay.min_ms() <= template.delay.max_ms());
        }
    }
});
