//! Runs every name check and assembles the [`NameReport`].

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use super::config::NamingConfig;
use super::filters::check_filter;
use super::normalizer::NormalizedName;
use super::report::{NameChecks, NameReport};
use super::structure::{
    check_alphanumeric, check_length, check_no_decimals, check_snake_case,
    check_starts_with_letter,
};
use super::words::{check_banned_words, check_exceptions, check_protected_words};
use crate::lexicon::Lexicon;

/// Check one name against `lexicon`.
///
/// Every dimension is evaluated, even after an earlier one fails, so the
/// report lists all problems at once.
pub fn validate_name(name: &str, lexicon: &Lexicon, config: &NamingConfig) -> NameReport {
    let normalized = NormalizedName::new(name, &config.filter_prefixes);

    let checks = NameChecks {
        alphanumeric: check_alphanumeric(&normalized),
        starts_with_letter: check_starts_with_letter(name),
        snake_case: check_snake_case(name, lexicon),
        length: check_length(name, config),
        no_decimals: check_no_decimals(name),
        filter_usage: check_filter(&normalized, lexicon.filters(), config.filter_fuzzy),
        banned_words: check_banned_words(
            &normalized,
            lexicon.banned_words(),
            config.banned_fuzzy,
        ),
        exception_casing: check_exceptions(&normalized, lexicon.exceptions()),
        protected_words: check_protected_words(&normalized, lexicon.protected_words()),
    };

    let report = NameReport::new(name, checks);
    debug!("'{}' valid: {}", name, report.is_valid());
    report
}

/// Column-name validator sharing one immutable lexicon.
///
/// Cloning is cheap; the lexicon sits behind an [`Arc`] so a validator can
/// be handed to worker threads freely.
#[derive(Debug, Clone)]
pub struct NameValidator {
    lexicon: Arc<Lexicon>,
    config: NamingConfig,
}

impl NameValidator {
    /// Share `lexicon` across all validations made with this validator.
    pub fn new(lexicon: Arc<Lexicon>, config: NamingConfig) -> Self {
        Self { lexicon, config }
    }

    /// The lexicon names are checked against.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Length and fuzzy-matching thresholds.
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Validate a single name.
    pub fn validate(&self, name: &str) -> NameReport {
        validate_name(name, &self.lexicon, &self.config)
    }

    /// Validate many names in parallel, keeping input order.
    pub fn validate_all<S>(&self, names: &[S]) -> Vec<NameReport>
    where
        S: AsRef<str> + Sync,
    {
        info!("Validating {} column names", names.len());
        names
            .par_iter()
            .map(|name| self.validate(name.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status::State;
    use crate::detectors::names::CheckKind;

    fn validator() -> NameValidator {
        let lexicon = Lexicon::builder()
            .banned_word("fred")
            .protected_word("ra", ["ascension", "ra_deg"])
            .filter("FUV_GALEX")
            .filter("u_SDSS")
            .exception("uberID")
            .build()
            .unwrap();
        NameValidator::new(Arc::new(lexicon), NamingConfig::default())
    }

    #[test]
    fn test_compliant_filter_name() {
        let report = validator().validate("FUV_GALEX");
        assert_eq!(report.status(CheckKind::FilterUsage).state(), State::Pass);
        assert!(report.is_valid());
    }

    #[test]
    fn test_misformatted_filter_name() {
        let report = validator().validate("fuvGALEX");
        let status = report.status(CheckKind::FilterUsage);
        assert_eq!(status.state(), State::Fail);
        assert_eq!(status.message(), Some("FUV_GALEX"));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_every_dimension_is_reported() {
        // Fails several dimensions at once; none of them hides the others.
        let report = validator().validate("1fred.x");
        assert_eq!(report.status(CheckKind::StartsWithLetter).state(), State::Fail);
        assert_eq!(report.status(CheckKind::NoDecimals).state(), State::Fail);
        assert_eq!(report.status(CheckKind::Alphanumeric).state(), State::Fail);
        assert_eq!(report.status(CheckKind::BannedWords).message(), Some("fred"));
        assert!(report.status(CheckKind::Length).is_pass());
    }

    #[test]
    fn test_empty_name_policy() {
        let report = validator().validate("");
        assert_eq!(report.status(CheckKind::Alphanumeric).state(), State::Fail);
        assert_eq!(report.status(CheckKind::StartsWithLetter).state(), State::Fail);
        assert_eq!(report.status(CheckKind::SnakeCase).state(), State::Fail);
        assert!(report.status(CheckKind::NoDecimals).is_pass());
        assert!(report.status(CheckKind::FilterUsage).is_pass());
        assert!(!report.is_valid());
    }

    #[test]
    fn test_validation_is_repeatable() {
        let validator = validator();
        assert_eq!(validator.validate("ra_deg"), validator.validate("ra_deg"));
    }

    #[test]
    fn test_validate_all_keeps_order() {
        let names = ["ra", "fuvGALEX", "uberID", "dec"];
        let reports = validator().validate_all(&names);
        let checked: Vec<_> = reports.iter().map(NameReport::name).collect();
        assert_eq!(checked, names);
        assert!(reports[0].is_valid());
        assert!(!reports[1].is_valid());
        assert!(reports[2].is_valid());
    }
}
