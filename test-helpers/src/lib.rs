//! Common helper functions for tests and benchmarks.
use exectime::{Config, SegmentInfo};

// --- Constants ---
pub const NOW: f64 = 1_700_000_000.0; // Fixed "current time" for deterministic scale guessing
pub const NS_PER_SEC: f64 = 1e9;
pub const IDLE_TIMES: &str = "0m0.000s;0m0.000s;0m0.000s;0m0.000s";

// --- Times String Helpers ---

/// Formats one `times` component, e.g. `component(1, 2, 50) == "1m2.050s"`.
pub fn component(minutes: u64, seconds: u64, millis: u64) -> String {
    format!("{minutes}m{seconds}.{millis:03}s")
}

/// Builds a `U;S;CU;CS` times string from (minutes, seconds, millis) triples.
pub fn times_string(parts: [(u64, u64, u64); 4]) -> String {
    parts
        .iter()
        .map(|&(m, s, ms)| component(m, s, ms))
        .collect::<Vec<_>>()
        .join(";")
}

/// Times string where only the shell's own user and sys time are set.
pub fn shell_times(user_ms: u64, sys_ms: u64) -> String {
    let split = |ms: u64| (ms / 60_000, (ms / 1000) % 60, ms % 1000);
    times_string([split(user_ms), split(sys_ms), (0, 0, 0), (0, 0, 0)])
}

// --- SegmentInfo Creation Helpers ---

/// Creates a SegmentInfo with nanosecond timestamps `secs` apart, ending just before [`NOW`].
pub fn ns_wall_info(secs: f64) -> SegmentInfo {
    let end = (NOW - 1.0) * NS_PER_SEC;
    SegmentInfo {
        exec_start: Some(end - secs * NS_PER_SEC),
        exec_end: Some(end),
        ..SegmentInfo::default()
    }
}

/// Creates a SegmentInfo carrying only before/after times strings.
pub fn times_info(prev: &str, now: &str) -> SegmentInfo {
    SegmentInfo {
        exec_times_prev: Some(prev.to_owned()),
        exec_times: Some(now.to_owned()),
        ..SegmentInfo::default()
    }
}

// --- Config Creation Helpers ---

/// Default configuration with user/sys segments enabled.
pub fn user_sys_config() -> Config {
    Config {
        enable_user_sys_time: true,
        ..Config::default()
    }
}

/// Default configuration with a custom threshold.
pub fn config_with_threshold(threshold: f64) -> Config {
    Config {
        threshold,
        ..Config::default()
    }
}
