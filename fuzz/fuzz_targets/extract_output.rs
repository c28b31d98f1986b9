#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(parser) = fuzz_ab::metrics::OutputParser::new() else {
        return;
    };
    let text = String::from_utf8_lossy(data);
    if let Ok(metrics) = parser.extract(&text) {
        debug_assert!(metrics.throughput >= 0.0);
        debug_assert!(text.contains(fuzz_ab::metrics::COMPLETED_LABEL));
    }
});
