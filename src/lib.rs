// Module declarations for the library crate.

pub mod cli;
pub mod config;
pub mod error;
pub mod info;
pub mod segment;
pub mod telemetry;
pub mod util;

// Re-export the entry points for hosts embedding the segment.
pub use config::Config;
pub use info::SegmentInfo;
pub use segment::{exectime, exectime_at, Segment};
