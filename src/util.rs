//! Utility functions shared across modules.

use std::time::Duration;

/// Formats fractional seconds using `humantime`, e.g. `1m 30s 500ms`.
/// Negative or non-finite values cannot be a `Duration` and are printed as plain seconds.
#[inline]
pub fn format_seconds(secs: f64) -> String {
    match Duration::try_from_secs_f64(secs) {
        Ok(duration) => humantime::format_duration(duration).to_string(),
        Err(_) => format!("{secs}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanizes_seconds() {
        assert_eq!(format_seconds(0.5), "500ms");
        assert_eq!(format_seconds(90.0), "1m 30s");
        assert_eq!(format_seconds(0.0), "0s");
    }

    #[test]
    fn negative_seconds_stay_plain() {
        assert_eq!(format_seconds(-1.5), "-1.5s");
    }
}
