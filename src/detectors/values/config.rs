//! Configuration for the range and sentinel checks on column data.

use serde::{Deserialize, Serialize};

use crate::core::config::validation::{validate_finite, validate_non_blank, validate_ordered};
use crate::core::errors::Result;

/// Which ends of a `[min, max]` range are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosedInterval {
    /// `[min, max)`
    Left,
    /// `(min, max]`
    Right,
    /// `[min, max]`
    Both,
    /// `(min, max)`
    #[serde(rename = "none", alias = "open")]
    Open,
}

impl ClosedInterval {
    /// Whether `value` lies inside the interval bounded by `min` and `max`.
    pub fn contains(self, value: f64, min: f64, max: f64) -> bool {
        let above_min = match self {
            ClosedInterval::Left | ClosedInterval::Both => value >= min,
            ClosedInterval::Right | ClosedInterval::Open => value > min,
        };
        let below_max = match self {
            ClosedInterval::Right | ClosedInterval::Both => value <= max,
            ClosedInterval::Left | ClosedInterval::Open => value < max,
        };
        above_min && below_max
    }

    /// Interval notation, e.g. `[0, 360)`.
    pub fn describe(self, min: f64, max: f64) -> String {
        let (open, close) = match self {
            ClosedInterval::Left => ('[', ')'),
            ClosedInterval::Right => ('(', ']'),
            ClosedInterval::Both => ('[', ']'),
            ClosedInterval::Open => ('(', ')'),
        };
        format!("{open}{min}, {max}{close}")
    }
}

/// Allowed value range for the column identified by a root token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeRule {
    /// Root token that identifies the column (e.g. `ra` matches `ra_j2000`)
    pub root: String,
    /// Explicit column name, bypassing the root-token search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Which bounds are inclusive
    pub closed: ClosedInterval,
}

impl RangeRule {
    /// Build a rule located by root token.
    pub fn new(root: impl Into<String>, min: f64, max: f64, closed: ClosedInterval) -> Self {
        Self {
            root: root.into(),
            column: None,
            min,
            max,
            closed,
        }
    }

    /// Pin the rule to a specific column name.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    fn validate(&self) -> Result<()> {
        validate_non_blank(&self.root, "values.ranges.root")?;
        validate_finite(self.min, "values.ranges.min")?;
        validate_finite(self.max, "values.ranges.max")?;
        validate_ordered(self.min, self.max, "values.ranges.min", "values.ranges.max")
    }
}

/// Configuration for the column data checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueChecksConfig {
    /// Placeholder value that must never appear in the data
    #[serde(default = "ValueChecksConfig::default_sentinel")]
    pub sentinel: f64,

    /// Range rules, evaluated in order
    #[serde(default = "ValueChecksConfig::default_ranges")]
    pub ranges: Vec<RangeRule>,
}

impl Default for ValueChecksConfig {
    fn default() -> Self {
        Self {
            sentinel: Self::default_sentinel(),
            ranges: Self::default_ranges(),
        }
    }
}

impl ValueChecksConfig {
    const fn default_sentinel() -> f64 {
        -999.0
    }

    fn default_ranges() -> Vec<RangeRule> {
        vec![
            RangeRule::new("ra", 0.0, 360.0, ClosedInterval::Left),
            RangeRule::new("dec", -90.0, 90.0, ClosedInterval::Both),
        ]
    }

    /// Validate value-check configuration
    pub fn validate(&self) -> Result<()> {
        validate_finite(self.sentinel, "values.sentinel")?;
        for rule in &self.ranges {
            rule.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_interval_bounds() {
        assert!(ClosedInterval::Left.contains(0.0, 0.0, 360.0));
        assert!(!ClosedInterval::Left.contains(360.0, 0.0, 360.0));
        assert!(!ClosedInterval::Right.contains(0.0, 0.0, 360.0));
        assert!(ClosedInterval::Right.contains(360.0, 0.0, 360.0));
        assert!(ClosedInterval::Both.contains(-90.0, -90.0, 90.0));
        assert!(ClosedInterval::Both.contains(90.0, -90.0, 90.0));
        assert!(!ClosedInterval::Open.contains(90.0, -90.0, 90.0));
        assert!(!ClosedInterval::Both.contains(f64::NAN, -90.0, 90.0));
    }

    #[test]
    fn test_describe() {
        assert_eq!(ClosedInterval::Left.describe(0.0, 360.0), "[0, 360)");
        assert_eq!(ClosedInterval::Both.describe(-90.0, 90.0), "[-90, 90]");
    }

    #[test]
    fn test_default_config() {
        let config = ValueChecksConfig::default();
        assert_eq!(config.sentinel, -999.0);
        assert_eq!(config.ranges.len(), 2);
        assert_eq!(config.ranges[0].root, "ra");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = ValueChecksConfig {
            ranges: vec![RangeRule::new("dec", 90.0, -90.0, ClosedInterval::Both)],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_interval_names_in_yaml() {
        let rule: RangeRule =
            serde_yaml::from_str("root: ra\nmin: 0\nmax: 360\nclosed: none\n").unwrap();
        assert_eq!(rule.closed, ClosedInterval::Open);

        let yaml = serde_yaml::to_string(&rule).unwrap();
        assert!(yaml.contains("closed: none"));
    }
}
