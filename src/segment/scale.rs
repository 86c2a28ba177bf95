//! Guessing the unit of a raw timestamp.
//!
//! Prompt hooks record timestamps with whatever their shell offers (`$EPOCHREALTIME`
//! without the dot, `date +%s%N`, ...), so the unit is inferred from the magnitude
//! relative to the current time.

use chrono::Utc;

/// Current wall-clock time as fractional seconds since the Unix epoch.
pub fn now_secs() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) * 1e-9
}

/// Returns the multiplier converting `timestamp` to seconds, e.g. `1e-9` for nanoseconds.
///
/// `None` when either input is zero, negative or not finite.
pub fn guess_scale(timestamp: f64, now_secs: f64) -> Option<f64> {
    if !(timestamp.is_finite() && now_secs.is_finite()) || timestamp <= 0.0 || now_secs <= 0.0 {
        return None;
    }
    let exponent = (timestamp / now_secs).log10().ceil();
    Some(1.0 / 10f64.powi(exponent as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: f64 = 1_700_000_000.5;

    #[test]
    fn detects_common_units() {
        // Timestamps are taken slightly before "now".
        assert_eq!(guess_scale(1_699_999_990.0, NOW), Some(1.0));
        assert_eq!(guess_scale(1_699_999_990_000.0, NOW), Some(1e-3));
        assert_eq!(guess_scale(1_699_999_990_000_000.0, NOW), Some(1e-6));
        assert_eq!(guess_scale(1_699_999_990_000_000_000.0, NOW), Some(1e-9));
    }

    #[test]
    fn zero_and_negative_inputs_are_unknown() {
        assert_eq!(guess_scale(0.0, NOW), None);
        assert_eq!(guess_scale(1.0, 0.0), None);
        assert_eq!(guess_scale(-5.0, NOW), None);
        assert_eq!(guess_scale(f64::NAN, NOW), None);
        assert_eq!(guess_scale(1.0, f64::INFINITY), None);
    }

    #[test]
    fn now_is_after_2020() {
        assert!(now_secs() > 1_577_836_800.0);
    }
}
