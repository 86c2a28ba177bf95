// fuzz/fuzz_targets/fuzz_assemble.rs
#![no_main]

use arbitrary::Arbitrary;
use exectime::{exectime_at, Config, SegmentInfo};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    exec_start: Option<f64>,
    exec_end: Option<f64>,
    exec_times: Option<String>,
    exec_times_prev: Option<String>,
    now_secs: f64,
    threshold: f64,
    significant_figures: u8,
    max_parts: u8,
}

fuzz_target!(|input: Input| {
    let cfg = Config {
        threshold: input.threshold,
        significant_figures: usize::from(input.significant_figures % 17),
        max_parts: usize::from(input.max_parts % 6),
        enable_user_sys_time: true,
        ..Config::default()
    };
    let info = SegmentInfo {
        exec_start: input.exec_start,
        exec_end: input.exec_end,
        exec_times: input.exec_times,
        exec_times_prev: input.exec_times_prev,
    };

    // Assembly must be total: no panics, gradient always in range.
    for segment in exectime_at(&info, &cfg, input.now_secs) {
        assert!((0.0..=100.0).contains(&segment.gradient_level));
    }
});
