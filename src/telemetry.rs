//! Tracing initialization. All log output goes to stderr; stdout carries only segments.

use crate::{config::Config, util};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "exectime=warn";
const VERBOSE_FILTER: &str = "exectime=debug";

/// Initialize the tracing subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_tracing(verbose: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true);

    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_owned());
    let filter = EnvFilter::try_new(&log_filter).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid RUST_LOG '{log_filter}': {e}");
        EnvFilter::new(default_filter)
    });

    tracing_subscriber::registry().with(fmt_layer).with(filter).init();

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        // Use option_env! for git sha to avoid build errors outside git repo
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        build_ts = env!("VERGEN_BUILD_TIMESTAMP"),
        "exectime starting"
    );
}

/// Logs the effective keyword options at debug level.
pub fn log_config(cfg: &Config) {
    debug!(threshold = %util::format_seconds(cfg.threshold),
        significant_figures = cfg.significant_figures,
        max_parts = cfg.max_parts,
        gradient_low = %util::format_seconds(cfg.gradient_range_low),
        gradient_high = %util::format_seconds(cfg.gradient_range_high),
        milliseconds_cutoff = %util::format_seconds(cfg.milliseconds_cutoff),
        highlight_groups = ?cfg.highlight_groups.as_slice(),
        wall_time_prefix = %cfg.wall_time_prefix,
        user_time_prefix = %cfg.user_time_prefix,
        sys_time_prefix = %cfg.sys_time_prefix,
        user_sys = cfg.enable_user_sys_time,
        "Configuration loaded");
}
