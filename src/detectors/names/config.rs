//! Thresholds and knobs for the column-name checks.

use serde::{Deserialize, Serialize};

use crate::core::config::validation::{
    validate_non_blank, validate_ordered, validate_positive_usize, validate_ratio,
};
use crate::core::errors::Result;

/// Warn/fail cut-offs on the 0-100 similarity scale.
///
/// A ratio strictly above `fail` fails; strictly above `warn` (and at or
/// below `fail`) warns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyThresholds {
    /// Lower cut-off producing a warning
    pub warn: u8,
    /// Upper cut-off producing a failure
    pub fail: u8,
}

impl FuzzyThresholds {
    /// Build a threshold pair.
    pub const fn new(warn: u8, fail: u8) -> Self {
        Self { warn, fail }
    }

    fn validate(&self, section: &str) -> Result<()> {
        validate_ratio(self.warn, &format!("{section}.warn"))?;
        validate_ratio(self.fail, &format!("{section}.fail"))?;
        validate_ordered(
            self.warn,
            self.fail,
            &format!("{section}.warn"),
            &format!("{section}.fail"),
        )
    }
}

/// Configuration for the column-name compliance checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Names at least this long (in characters) produce a warning
    #[serde(default = "NamingConfig::default_warn_length")]
    pub warn_length: usize,

    /// Names longer than this fail
    #[serde(default = "NamingConfig::default_max_length")]
    pub max_length: usize,

    /// Similarity cut-offs for resemblance to a controlled filter name
    #[serde(default = "NamingConfig::default_filter_fuzzy")]
    pub filter_fuzzy: FuzzyThresholds,

    /// Similarity cut-offs for resemblance to a banned word
    #[serde(default = "NamingConfig::default_banned_fuzzy")]
    pub banned_fuzzy: FuzzyThresholds,

    /// Filler prefixes stripped before filter matching when followed by an
    /// upper-case character (tried in order)
    #[serde(default = "NamingConfig::default_filter_prefixes")]
    pub filter_prefixes: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            warn_length: Self::default_warn_length(),
            max_length: Self::default_max_length(),
            filter_fuzzy: Self::default_filter_fuzzy(),
            banned_fuzzy: Self::default_banned_fuzzy(),
            filter_prefixes: Self::default_filter_prefixes(),
        }
    }
}

impl NamingConfig {
    const fn default_warn_length() -> usize {
        25
    }

    const fn default_max_length() -> usize {
        50
    }

    const fn default_filter_fuzzy() -> FuzzyThresholds {
        FuzzyThresholds::new(60, 80)
    }

    const fn default_banned_fuzzy() -> FuzzyThresholds {
        FuzzyThresholds::new(50, 80)
    }

    fn default_filter_prefixes() -> Vec<String> {
        ["filter", "filt", "band"]
            .iter()
            .map(|prefix| prefix.to_string())
            .collect()
    }

    /// Validate naming configuration
    pub fn validate(&self) -> Result<()> {
        validate_positive_usize(self.warn_length, "naming.warn_length")?;
        validate_positive_usize(self.max_length, "naming.max_length")?;
        validate_ordered(
            self.warn_length,
            self.max_length,
            "naming.warn_length",
            "naming.max_length",
        )?;
        self.filter_fuzzy.validate("naming.filter_fuzzy")?;
        self.banned_fuzzy.validate("naming.banned_fuzzy")?;
        for prefix in &self.filter_prefixes {
            validate_non_blank(prefix, "naming.filter_prefixes")?;
        }
        Ok(())
    }
}
