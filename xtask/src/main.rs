use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate_to, Generator, Shell};
use clap_complete_nushell::Nushell;
use clap_mangen::Man;
use exectime::cli::Args;

use std::io::Write;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Parser, Debug)]
#[command(about = "Build helpers for exectime")]
struct XtaskArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Write the man page and all shell completions under `docs/`.
    GenerateDocs,
    /// Write only the man page.
    Man {
        /// Output directory (default: docs/man).
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Write completions for one shell, or for all of them.
    Completions {
        /// Shell to generate for; `nushell` is accepted too. All shells when omitted.
        shell: Option<String>,
        /// Output directory (default: docs/completions).
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = XtaskArgs::parse();
    let docs_dir = project_root().join("docs");
    let cmd = Args::command();

    match args.command {
        Commands::GenerateDocs => {
            let man_dir = docs_dir.join("man");
            let completions_dir = docs_dir.join("completions");
            write_man_page(&cmd, &man_dir)?;
            write_completions(&cmd, None, &completions_dir)?;
            println!("Docs written to {}", docs_dir.display());
            Ok(())
        }
        Commands::Man { out_dir } => {
            write_man_page(&cmd, &out_dir.unwrap_or_else(|| docs_dir.join("man"))).map(|_| ())
        }
        Commands::Completions { shell, out_dir } => write_completions(
            &cmd,
            shell.as_deref(),
            &out_dir.unwrap_or_else(|| docs_dir.join("completions")),
        ),
    }
}

/// Workspace root, one level above this crate.
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

// --- Man Page Content Constants ---
// Note: Using roff formatting. \fB...\fR = bold, \fI...\fR = italic, \- = hyphen, \(bu = bullet

const MAN_FORMAT: &str = r#"
Durations below \fB\-\-milliseconds\-cutoff\fR (10 seconds by default) are shown in milliseconds, rounded to \fB\-\-significant\-figures\fR, e.g. \fB3.2ms\fR or \fB2500ms\fR.
.PP
Longer durations are rounded to the same number of significant figures first and then split into days, hours, minutes and seconds. Only non-zero units are printed, largest first, and at most \fB\-\-max\-parts\fR of them: with the defaults, 3661 seconds is shown as \fB1h1m\fR and 90061 seconds as \fB1d 1h\fR. A fractional part only ever belongs to the seconds, e.g. \fB12.3s\fR.
.PP
Each segment also carries a gradient level between 0 and 100: 0 at or below \fB\-\-gradient\-range\-low\fR, 100 at or above \fB\-\-gradient\-range\-high\fR, linear in between. Themes use it to pick a color.
"#;

const MAN_INPUT: &str = r#"
.TP
.B \-\-exec\-start, \-\-exec\-end
Timestamps taken before and after the command. The unit does not need to be specified: it is guessed from the magnitude of \fB\-\-exec\-end\fR relative to the current time, so seconds, milliseconds, microseconds and nanoseconds all work. If either is missing, no wall time segment is printed.
.TP
.B \-\-exec\-times\-prev, \-\-exec\-times
Output of the bash \fBtimes\fR builtin before and after the command, with its four values joined by semicolons (shell user, shell sys, children user, children sys), e.g. \fI0m0.010s;0m0.004s;0m1.250s;0m0.310s\fR. User and sys segments are printed only with \fB\-\-user\-sys\fR; malformed strings silently suppress the affected segment.
.TP
.B \-\-stdin
Reads the four fields above as a JSON object from standard input instead. Timestamps may be numbers or numeric strings; unknown keys are ignored.
"#;

const MAN_EXAMPLES: &str = r#"
.PP
.B Bash prompt hook:
.IP
.nf
PS0='${PS0}$(date +%s%N > /tmp/exectime.$$)'
PROMPT_COMMAND='{bin_name} \-\-exec\-start "$(cat /tmp/exectime.$$)" \-\-exec\-end "$(date +%s%N)" \-\-threshold 1'
.fi
.PP
.B JSON segments for a status-line renderer:
.IP
.nf
{bin_name} \-\-exec\-start 1700000000000 \-\-exec\-end 1700000012345 \-\-json
.fi
.PP
.B Keyword options as JSON:
.IP
.nf
{bin_name} \-\-options '{"highlight_groups": "exectime", "max_parts": 3}' ...
.fi
"#;

const MAN_EXIT_STATUS: &str = r#"
.IP 0 4
Success, including the case where nothing is printed because no segment applies.
.IP 1 4
Input/output error, or invalid JSON on standard input with \fB\-\-stdin\fR.
.IP 2 4
Configuration error, e.g. equal gradient bounds, significant figures outside 1 to 17, zero max parts, or invalid \fB\-\-options\fR JSON.
"#;

const MAN_ENVIRONMENT: &str = r#"
.TP
.B RUST_LOG
Controls the logging verbosity and filtering, overriding defaults set by \fB\-\-verbose\fR. Uses the \fBtracing_subscriber::EnvFilter\fR format, e.g. \fBRUST_LOG=exectime=trace\fR. Logs always go to standard error.
"#;

const MAN_BUGS: &str = r#"
Please report bugs, issues, or feature requests via the GitHub issue tracker:
https://github.com/Rongronggg9/powerline-exectime/issues
"#;

const MAN_SEE_ALSO: &str = r#"
\fBbash\fR(1) (the \fBtimes\fR builtin and \fBPROMPT_COMMAND\fR), \fBdate\fR(1)
"#;

/// Renders `<bin>.1` into `dir`: clap's standard sections followed by ours.
fn write_man_page(cmd: &clap::Command, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let bin_name = cmd.get_name();
    let path = dir.join(format!("{bin_name}.1"));

    let date = chrono::Local::now().format("%B %d, %Y").to_string();
    let mut buffer: Vec<u8> = Vec::new();
    Man::new(cmd.clone())
        .date(date)
        .source(format!("{bin_name} {}", env!("CARGO_PKG_VERSION")))
        .render(&mut buffer)?;

    let sections = [
        ("FORMAT", MAN_FORMAT),
        ("INPUT", MAN_INPUT),
        ("EXAMPLES", MAN_EXAMPLES),
        ("EXIT STATUS", MAN_EXIT_STATUS),
        ("ENVIRONMENT", MAN_ENVIRONMENT),
        ("BUGS", MAN_BUGS),
        ("SEE ALSO", MAN_SEE_ALSO),
    ];
    for (title, body) in sections {
        writeln!(buffer, ".SH {title}")?;
        writeln!(buffer, "{}", body.replace("{bin_name}", bin_name))?;
    }

    fs::write(&path, buffer).with_context(|| format!("writing {}", path.display()))?;
    println!("Man page: {}", path.display());
    Ok(path)
}

/// Writes completion scripts for `shell` (or every supported shell) into `dir`.
fn write_completions(cmd: &clap::Command, shell: Option<&str>, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    match shell {
        Some(name) if name.eq_ignore_ascii_case("nushell") || name.eq_ignore_ascii_case("nu") => {
            write_completion(Nushell, cmd, dir)
        }
        Some(name) => {
            let shell: Shell = name
                .parse()
                .map_err(|e| anyhow::anyhow!("unknown shell {name:?}: {e}"))?;
            write_completion(shell, cmd, dir)
        }
        None => {
            for shell in [Shell::Bash, Shell::Elvish, Shell::Fish, Shell::PowerShell, Shell::Zsh] {
                write_completion(shell, cmd, dir)?;
            }
            write_completion(Nushell, cmd, dir)
        }
    }
}

fn write_completion<G: Generator>(generator: G, cmd: &clap::Command, dir: &Path) -> Result<()> {
    let bin_name = cmd.get_name().to_owned();
    let path = generate_to(generator, &mut cmd.clone(), bin_name, dir)
        .with_context(|| format!("writing completions into {}", dir.display()))?;
    println!("Completions: {}", path.display());
    Ok(())
}
