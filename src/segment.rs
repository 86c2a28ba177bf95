// This module assembles the status-line segments for the last command.
// Every function here is pure given its inputs; the wall clock is read once in
// `exectime` and passed down.

pub mod format;
pub mod gradient;
pub mod scale;
pub mod times;


use crate::config::Config;
use crate::info::SegmentInfo;
use serde::Serialize;
use tracing::{debug, trace};

/// Highlight groups appended after any configured overrides, so themes can match
/// whichever of them they define.
pub const HIGHLIGHT_GROUPS: [&str; 4] = [
    "exectime_gradient",
    "system_load_gradient",
    "network_load_gradient",
    "system_load",
];

/// One rendered piece of status-line output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub contents:           String,
    pub highlight_groups:   Vec<String>,
    pub gradient_level:     f64,
    pub draw_inner_divider: bool,
}

/// Configured overrides followed by [`HIGHLIGHT_GROUPS`].
pub fn highlight_groups(cfg: &Config) -> Vec<String> {
    cfg.highlight_groups
        .as_slice()
        .iter()
        .cloned()
        .chain(HIGHLIGHT_GROUPS.iter().map(|g| (*g).to_owned()))
        .collect()
}

/// Builds the segment for `duration` unless it does not exceed the threshold.
fn make_segment(
    kind: &'static str,
    duration: Option<f64>,
    prefix: &str,
    cfg: &Config,
    groups: &[String],
) -> Option<Segment> {
    let Some(duration) = duration else {
        trace!(kind, "Duration unknown, skipping segment");
        return None;
    };
    if !duration.is_finite() {
        trace!(kind, duration, "Duration not finite, skipping segment");
        return None;
    }
    if duration <= cfg.threshold {
        trace!(kind, duration, threshold = cfg.threshold, "Duration below threshold, skipping segment");
        return None;
    }

    let text = format::format_duration_with_cutoff(
        duration.abs(),
        cfg.significant_figures,
        cfg.max_parts,
        cfg.milliseconds_cutoff,
    );
    if text.is_empty() {
        trace!(kind, duration, "Duration too large to display, skipping segment");
        return None;
    }
    let level = gradient::gradient_level(duration, cfg.gradient_range_low, cfg.gradient_range_high);
    debug!(kind, duration, %text, gradient_level = level, "Emitting segment");

    Some(Segment {
        contents:           format!("{prefix}{text}"),
        highlight_groups:   groups.to_vec(),
        gradient_level:     level,
        draw_inner_divider: true,
    })
}

/// Wall-clock segment from `exec_start`/`exec_end`, whose unit is guessed from
/// `exec_end` relative to `now_secs`.
pub fn wall_time_segments(info: &SegmentInfo, cfg: &Config, now_secs: f64) -> Vec<Segment> {
    let (Some(start), Some(end)) = (info.exec_start, info.exec_end) else {
        trace!("exec_start or exec_end missing, no wall time segment");
        return Vec::new();
    };
    let delta = scale::guess_scale(end, now_secs).map(|scale| (end - start) * scale);
    let groups = highlight_groups(cfg);
    make_segment("wall", delta, &cfg.wall_time_prefix, cfg, &groups)
        .into_iter()
        .collect()
}

/// User and system CPU time segments from the `times` strings before and after the command.
///
/// Empty unless `enable_user_sys_time` is set.
pub fn user_sys_segments(info: &SegmentInfo, cfg: &Config) -> Vec<Segment> {
    if !cfg.enable_user_sys_time {
        return Vec::new();
    }
    let prev = times::parse_times(info.exec_times_prev.as_deref());
    let now = times::parse_times(info.exec_times.as_deref());
    let delta = now.delta_since(&prev);

    let groups = highlight_groups(cfg);
    [
        make_segment("user", delta.user, &cfg.user_time_prefix, cfg, &groups),
        make_segment("sys", delta.sys, &cfg.sys_time_prefix, cfg, &groups),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// All segments for the last command, wall time first, using `now_secs` as the current time.
pub fn exectime_at(info: &SegmentInfo, cfg: &Config, now_secs: f64) -> Vec<Segment> {
    let mut segments = wall_time_segments(info, cfg, now_secs);
    segments.extend(user_sys_segments(info, cfg));
    segments
}

/// All segments for the last command, wall time first.
pub fn exectime(info: &SegmentInfo, cfg: &Config) -> Vec<Segment> {
    exectime_at(info, cfg, scale::now_secs())
}
