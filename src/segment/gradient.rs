/// Position of `duration` between `low` (0) and `high` (100), clamped to `[0, 100]`.
///
/// Equal bounds are rejected by [`Config::validate`](crate::config::Config::validate);
/// if they reach this function anyway the result is a step at `low`.
pub fn gradient_level(duration: f64, low: f64, high: f64) -> f64 {
    if high == low {
        return if duration >= low { 100.0 } else { 0.0 };
    }
    let level = (duration - low) / (high - low) * 100.0;
    if level.is_nan() {
        return 0.0;
    }
    level.clamp(0.0, 100.0)
}
