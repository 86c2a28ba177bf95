//! Keyword options controlling how segments are formatted.

use crate::error::ConfigError;
use crate::segment::format::{DEFAULT_MILLISECONDS_CUTOFF, MAX_SIGNIFICANT_FIGURES};
use serde::{Deserialize, Deserializer};

/// Highlight group overrides, accepted as a single name or a list of names.
///
/// Always stored as an ordered list; `null` and a missing key both mean "no overrides".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightGroups(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for HighlightGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
            None => Self::default(),
            Some(OneOrMany::One(group)) => Self(vec![group]),
            Some(OneOrMany::Many(groups)) => Self(groups),
        })
    }
}

impl From<&str> for HighlightGroups {
    fn from(group: &str) -> Self {
        Self(vec![group.to_owned()])
    }
}

impl From<String> for HighlightGroups {
    fn from(group: String) -> Self {
        Self(vec![group])
    }
}

impl From<Vec<String>> for HighlightGroups {
    fn from(groups: Vec<String>) -> Self {
        Self(groups)
    }
}

impl HighlightGroups {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub threshold:            f64,
    pub significant_figures:  usize,
    pub max_parts:            usize,
    pub gradient_range_low:   f64,
    pub gradient_range_high:  f64,
    pub highlight_groups:     HighlightGroups,
    pub wall_time_prefix:     String,
    pub user_time_prefix:     String,
    pub sys_time_prefix:      String,
    pub enable_user_sys_time: bool,
    pub milliseconds_cutoff:  f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold:            0.0,
            significant_figures:  3,
            max_parts:            2,
            gradient_range_low:   0.5,
            gradient_range_high:  30.0,
            highlight_groups:     HighlightGroups::default(),
            wall_time_prefix:     String::new(),
            user_time_prefix:     "u:".to_owned(),
            sys_time_prefix:      "s:".to_owned(),
            enable_user_sys_time: false,
            milliseconds_cutoff:  DEFAULT_MILLISECONDS_CUTOFF,
        }
    }
}

impl Config {
    /// Parses keyword options from a JSON object. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the preconditions the formatter and gradient calculator rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("threshold", self.threshold),
            ("gradient_range_low", self.gradient_range_low),
            ("gradient_range_high", self.gradient_range_high),
            ("milliseconds_cutoff", self.milliseconds_cutoff),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteOption(name));
            }
        }
        if self.significant_figures == 0 {
            return Err(ConfigError::ZeroSignificantFigures);
        }
        if self.significant_figures > MAX_SIGNIFICANT_FIGURES {
            return Err(ConfigError::SignificantFiguresTooLarge(self.significant_figures));
        }
        if self.max_parts == 0 {
            return Err(ConfigError::ZeroMaxParts);
        }
        if self.gradient_range_low == self.gradient_range_high {
            return Err(ConfigError::EqualGradientBounds(self.gradient_range_low));
        }
        Ok(())
    }
}

impl TryFrom<&crate::cli::Args> for Config {
    type Error = ConfigError;

    /// Inline `--options` JSON is applied first; explicit flags override it.
    fn try_from(a: &crate::cli::Args) -> Result<Self, Self::Error> {
        let mut cfg = match a.options.as_deref() {
            Some(json) => Config::from_json(json)?,
            None => Config::default(),
        };

        if let Some(v) = a.threshold {
            cfg.threshold = v;
        }
        if let Some(v) = a.significant_figures {
            cfg.significant_figures = v;
        }
        if let Some(v) = a.max_parts {
            cfg.max_parts = v;
        }
        if let Some(v) = a.gradient_range_low {
            cfg.gradient_range_low = v;
        }
        if let Some(v) = a.gradient_range_high {
            cfg.gradient_range_high = v;
        }
        if !a.highlight_groups.is_empty() {
            cfg.highlight_groups = a.highlight_groups.clone().into();
        }
        if let Some(v) = &a.wall_time_prefix {
            cfg.wall_time_prefix = v.clone();
        }
        if let Some(v) = &a.user_time_prefix {
            cfg.user_time_prefix = v.clone();
        }
        if let Some(v) = &a.sys_time_prefix {
            cfg.sys_time_prefix = v.clone();
        }
        if a.user_sys {
            cfg.enable_user_sys_time = true;
        }
        if let Some(v) = a.milliseconds_cutoff {
            cfg.milliseconds_cutoff = v;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = Config::default();
        assert_eq!(cfg.threshold, 0.0);
        assert_eq!(cfg.significant_figures, 3);
        assert_eq!(cfg.max_parts, 2);
        assert_eq!(cfg.gradient_range_low, 0.5);
        assert_eq!(cfg.gradient_range_high, 30.0);
        assert!(cfg.highlight_groups.is_empty());
        assert_eq!(cfg.wall_time_prefix, "");
        assert_eq!(cfg.user_time_prefix, "u:");
        assert_eq!(cfg.sys_time_prefix, "s:");
        assert!(!cfg.enable_user_sys_time);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn highlight_groups_accept_string_or_list() {
        let single = Config::from_json(r#"{"highlight_groups": "exectime"}"#).unwrap();
        assert_eq!(single.highlight_groups.as_slice(), ["exectime"]);

        let many = Config::from_json(r#"{"highlight_groups": ["a", "b"]}"#).unwrap();
        assert_eq!(many.highlight_groups.as_slice(), ["a", "b"]);

        let null = Config::from_json(r#"{"highlight_groups": null}"#).unwrap();
        assert!(null.highlight_groups.is_empty());
    }

    #[test]
    fn json_keeps_defaults_for_missing_keys() {
        let cfg = Config::from_json(r#"{"threshold": 2.5, "enable_user_sys_time": true}"#).unwrap();
        assert_eq!(cfg.threshold, 2.5);
        assert!(cfg.enable_user_sys_time);
        assert_eq!(cfg.max_parts, 2);
        assert_eq!(cfg.user_time_prefix, "u:");
    }

    #[test]
    fn malformed_json_is_an_options_error() {
        let err = Config::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Options(_)));
    }

    #[test]
    fn validate_rejects_equal_gradient_bounds() {
        let cfg = Config {
            gradient_range_low: 5.0,
            gradient_range_high: 5.0,
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::EqualGradientBounds(v)) if v == 5.0
        ));
    }

    #[test]
    fn validate_rejects_zero_counts_and_non_finite_values() {
        let zero_sig = Config { significant_figures: 0, ..Config::default() };
        assert!(matches!(zero_sig.validate(), Err(ConfigError::ZeroSignificantFigures)));

        let huge_sig = Config { significant_figures: usize::MAX, ..Config::default() };
        assert!(matches!(huge_sig.validate(), Err(ConfigError::SignificantFiguresTooLarge(usize::MAX))));

        let max_sig = Config { significant_figures: MAX_SIGNIFICANT_FIGURES, ..Config::default() };
        assert!(max_sig.validate().is_ok());

        let zero_parts = Config { max_parts: 0, ..Config::default() };
        assert!(matches!(zero_parts.validate(), Err(ConfigError::ZeroMaxParts)));

        let nan = Config { threshold: f64::NAN, ..Config::default() };
        assert!(matches!(nan.validate(), Err(ConfigError::NonFiniteOption("threshold"))));
    }
}
