//! Error types for configuration handling.

use thiserror::Error;

/// Errors produced while building or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Both gradient bounds are equal, which would divide by zero.
    #[error("gradient_range_low and gradient_range_high must differ (both are {0})")]
    EqualGradientBounds(f64),

    /// `significant_figures` must be at least 1.
    #[error("significant_figures must be at least 1")]
    ZeroSignificantFigures,

    /// More significant figures than an `f64` carries.
    #[error("significant_figures must be at most {max} (got {0})", max = crate::segment::format::MAX_SIGNIFICANT_FIGURES)]
    SignificantFiguresTooLarge(usize),

    /// `max_parts` must be at least 1.
    #[error("max_parts must be at least 1")]
    ZeroMaxParts,

    /// A numeric option is NaN or infinite.
    #[error("option {0} must be a finite number")]
    NonFiniteOption(&'static str),

    /// The inline JSON keyword options could not be parsed.
    #[error("invalid options JSON: {0}")]
    Options(#[from] serde_json::Error),
}
