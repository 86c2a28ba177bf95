use clap::Parser;

/// Shows the execution time of the last shell command as status-line segments.
/// Prints the segment texts to stdout (or a JSON array with --json); prints nothing
/// when no segment should be displayed.
#[derive(Parser, Debug, Default)]
#[command(name = "exectime", author, version, about, long_about = None)]
pub struct Args {
    /// Timestamp taken when the command started. Any sub-second unit (ms, µs, ns);
    /// the unit is guessed from the magnitude of --exec-end.
    #[arg(long, value_name = "TIMESTAMP", allow_negative_numbers = true)]
    pub exec_start: Option<f64>,

    /// Timestamp taken when the command finished, in the same unit as --exec-start.
    #[arg(long, value_name = "TIMESTAMP", allow_negative_numbers = true)]
    pub exec_end: Option<f64>,

    /// Output of bash `times` after the command, as "U;S;CU;CS" (e.g. "0m1.250s;0m0.010s;0m0.000s;0m0.000s").
    #[arg(long, value_name = "TIMES")]
    pub exec_times: Option<String>,

    /// Output of bash `times` before the command, in the same format as --exec-times.
    #[arg(long, value_name = "TIMES")]
    pub exec_times_prev: Option<String>,

    /// Read the input fields as one JSON object from stdin instead of the flags above.
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with_all = ["exec_start", "exec_end", "exec_times", "exec_times_prev"])]
    pub stdin: bool,

    /// Keyword options as a JSON object, e.g. '{"threshold": 1, "highlight_groups": "exectime"}'.
    /// Applied before the individual option flags, which take precedence.
    #[arg(long, value_name = "JSON")]
    pub options: Option<String>,

    /// Minimum duration (seconds) a segment needs to be displayed. [default: 0]
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Significant figures kept when rounding a duration. [default: 3]
    #[arg(long, value_name = "N")]
    pub significant_figures: Option<usize>,

    /// Maximum number of units displayed, e.g. 1d2h3m4s becomes 1d 2h with 2. [default: 2]
    #[arg(long, value_name = "N")]
    pub max_parts: Option<usize>,

    /// Durations at or below this many seconds get gradient level 0. [default: 0.5]
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub gradient_range_low: Option<f64>,

    /// Durations at or above this many seconds get gradient level 100. [default: 30]
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub gradient_range_high: Option<f64>,

    /// Highlight group placed before the default groups. Repeat to add several.
    #[arg(long = "highlight-group", value_name = "GROUP")]
    pub highlight_groups: Vec<String>,

    /// Text placed before the wall-clock duration. [default: ""]
    #[arg(long, value_name = "TEXT")]
    pub wall_time_prefix: Option<String>,

    /// Text placed before the user CPU time. [default: "u:"]
    #[arg(long, value_name = "TEXT")]
    pub user_time_prefix: Option<String>,

    /// Text placed before the system CPU time. [default: "s:"]
    #[arg(long, value_name = "TEXT")]
    pub sys_time_prefix: Option<String>,

    /// Also display user and system CPU time derived from --exec-times/--exec-times-prev.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub user_sys: bool,

    /// Durations below this many seconds are shown in milliseconds. [default: 10]
    #[arg(long, value_name = "SECONDS")]
    pub milliseconds_cutoff: Option<f64>,

    /// Print segments as a JSON array instead of plain text.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    /// Enable verbose logging to stderr.
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

/// Parses command line arguments using clap.
pub fn parse_args() -> Args {
    Args::parse()
}
