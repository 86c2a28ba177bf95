// fuzz/fuzz_targets/fuzz_parse_times.rs
#![no_main]

use exectime::segment::times::{parse_component, parse_times};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing must never panic, and a parsed value is never negative.
    let parsed = parse_times(Some(data));
    for value in [parsed.user, parsed.sys].into_iter().flatten() {
        assert!(value >= 0.0);
    }

    for component in data.split(';') {
        if let Some(secs) = parse_component(component) {
            assert!(secs >= 0.0);
        }
    }
});
