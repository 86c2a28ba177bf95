//! Per-invocation input from the prompt hook and output of rendered segments.

use crate::segment::Segment;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::{self, Read, Write};

/// What the shell hook knows about the last command. Every field is optional;
/// absent fields only suppress the segments that need them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentInfo {
    /// Start timestamp, unit guessed at runtime. Numbers and numeric strings are accepted.
    #[serde(deserialize_with = "lenient_number")]
    pub exec_start:      Option<f64>,
    /// End timestamp, same unit as `exec_start`.
    #[serde(deserialize_with = "lenient_number")]
    pub exec_end:        Option<f64>,
    /// `times` output after the command.
    pub exec_times:      Option<String>,
    /// `times` output before the command.
    pub exec_times_prev: Option<String>,
}

impl From<&crate::cli::Args> for SegmentInfo {
    fn from(a: &crate::cli::Args) -> Self {
        Self {
            exec_start:      a.exec_start,
            exec_end:        a.exec_end,
            exec_times:      a.exec_times.clone(),
            exec_times_prev: a.exec_times_prev.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accepts `123`, `"123"` or `null`; text that is not a number counts as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Reads one JSON `SegmentInfo` object from the reader.
pub fn read_segment_info(reader: &mut impl Read) -> io::Result<SegmentInfo> {
    serde_json::from_reader(reader).map_err(io::Error::from)
}

/// Writes segments as plain text (texts joined by a space, one line) or as a JSON array.
///
/// Plain mode writes nothing at all for an empty list so prompts stay clean.
pub fn write_segments(writer: &mut impl Write, segments: &[Segment], json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer(&mut *writer, segments)?;
        return writeln!(writer);
    }
    if segments.is_empty() {
        return Ok(());
    }
    let line = segments
        .iter()
        .map(|s| s.contents.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(writer, "{line}")
}
