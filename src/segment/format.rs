//! Compact rendering of durations: `3.2ms`, `12.3s`, `1h1m`, `2d 3h`.

/// Durations below this many seconds are shown in milliseconds.
pub const DEFAULT_MILLISECONDS_CUTOFF: f64 = 10.0;

/// Digits an `f64` can meaningfully carry; larger requests are clamped to this.
pub const MAX_SIGNIFICANT_FIGURES: usize = 17;

const MILLISECONDS: f64 = 1000.0;

/// Rounds `value` to `significant_figures` digits and prints it without redundant
/// trailing zeros, like C's `%g` but never switching to exponent notation.
///
/// `format_significant(0.0032, 3) == "0.0032"`, `format_significant(12345.0, 3) == "12300"`.
pub fn format_significant(value: f64, significant_figures: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    // `{:e}` rounds correctly to the requested digit count, e.g. "1.00e4".
    let precision = significant_figures.clamp(1, MAX_SIGNIFICANT_FIGURES) - 1;
    let sci = format!("{:.*e}", precision, value.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return sci;
    };
    let digits = mantissa.replace('.', "");
    let point = exponent + 1;

    let mut out = if value < 0.0 { String::from("-") } else { String::new() };
    if point <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat(point.unsigned_abs() as usize));
        out.push_str(&digits);
    } else if point as usize >= digits.len() {
        out.push_str(&digits);
        out.push_str(&"0".repeat(point as usize - digits.len()));
    } else {
        let (int_digits, frac_digits) = digits.split_at(point as usize);
        out.push_str(int_digits);
        out.push('.');
        out.push_str(frac_digits);
    }

    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    out
}

/// Formats `seconds` with the default 10 second milliseconds cutoff.
pub fn format_duration(seconds: f64, significant_figures: usize, max_parts: usize) -> String {
    format_duration_with_cutoff(seconds, significant_figures, max_parts, DEFAULT_MILLISECONDS_CUTOFF)
}

/// Formats a non-negative duration. Non-finite input has no duration to show and
/// yields an empty string.
///
/// Below `cutoff` seconds the result is milliseconds (`"250ms"`). Otherwise the
/// duration is rounded to `significant_figures` first and split into days, hours,
/// minutes and seconds, of which at most `max_parts` non-zero ones are printed,
/// largest first. A fractional part only ever attaches to the seconds.
pub fn format_duration_with_cutoff(
    seconds: f64,
    significant_figures: usize,
    max_parts: usize,
    cutoff: f64,
) -> String {
    if !seconds.is_finite() {
        return String::new();
    }
    let max_parts = max_parts.max(1);
    if seconds < cutoff {
        return format_significant(seconds * MILLISECONDS, significant_figures) + "ms";
    }

    let rounded = format_significant(seconds, significant_figures);
    let (int_part, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    // Beyond u64 seconds there is nothing sensible to print.
    let Ok(total) = int_part.parse::<u64>() else {
        return String::new();
    };

    let secs = total % 60;
    let minutes = total / 60;
    let hours = minutes / 60;
    let minutes = minutes % 60;
    let days = hours / 24;
    let hours = hours % 24;

    let mut buf = String::new();
    let mut parts = 0;
    for (value, unit) in [(days, "d "), (hours, "h"), (minutes, "m")] {
        if value > 0 && parts < max_parts {
            buf.push_str(&format!("{value}{unit}"));
            parts += 1;
        }
    }
    if parts < max_parts {
        match (secs, frac) {
            (0, "") => {}
            (0, frac) => buf.push_str(&format!("0.{frac}s")),
            (secs, "") => buf.push_str(&format!("{secs}s")),
            (secs, frac) => buf.push_str(&format!("{secs}.{frac}s")),
        }
    }
    buf.trim().to_owned()
}
