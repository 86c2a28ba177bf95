// Binary entry point.
// Parses arguments, sets up logging, builds the configuration and input record,
// then prints the assembled segments to stdout.

use exectime::config::Config;
use exectime::info::{self, SegmentInfo};
use exectime::{cli, segment, telemetry};
use std::io::{self, Write};
use std::process::exit;
use tracing::debug;

fn main() -> io::Result<()> {
    let args = cli::parse_args();
    telemetry::init_tracing(args.verbose);

    let cfg = match Config::try_from(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("exectime: {e}");
            exit(2); // Configuration errors get their own exit code
        }
    };
    telemetry::log_config(&cfg);

    let info = if args.stdin {
        match info::read_segment_info(&mut io::stdin().lock()) {
            Ok(info) => info,
            Err(e) => {
                eprintln!("exectime: invalid input on stdin: {e}");
                exit(1);
            }
        }
    } else {
        SegmentInfo::from(&args)
    };
    debug!(?info, "Input loaded");

    let segments = segment::exectime(&info, &cfg);
    debug!(count = segments.len(), "Segments assembled");

    let mut stdout = io::stdout().lock();
    info::write_segments(&mut stdout, &segments, args.json)?;
    stdout.flush()
}
