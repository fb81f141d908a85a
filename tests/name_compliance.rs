//! End-to-end behaviour of the name checks against the bundled lexicon,
//! plus property tests over the filter vocabulary and arbitrary names.

use std::sync::Arc;

use proptest::prelude::*;

use colcheck_rs::detectors::names::filters::check_filter;
use colcheck_rs::detectors::names::normalizer::{reverse_tokens, NormalizedName};
use colcheck_rs::detectors::names::similarity::ratio;
use colcheck_rs::detectors::names::structure::check_snake_case;
use colcheck_rs::detectors::names::words::check_banned_words;
use colcheck_rs::detectors::names::{CheckKind, NamingConfig};
use colcheck_rs::{Lexicon, NameValidator, State};

fn bundled() -> Lexicon {
    Lexicon::bundled().unwrap()
}

fn validator() -> NameValidator {
    NameValidator::new(Arc::new(bundled()), NamingConfig::default())
}

fn filter_names() -> Vec<String> {
    bundled()
        .filters()
        .iter()
        .map(|filter| filter.name().to_string())
        .collect()
}

fn filter_status(name: &str, lexicon: &Lexicon) -> colcheck_rs::Status {
    let config = NamingConfig::default();
    check_filter(
        &NormalizedName::new(name, &config.filter_prefixes),
        lexicon.filters(),
        config.filter_fuzzy,
    )
}

#[test]
fn scenario_exact_filter_is_valid() {
    let report = validator().validate("FUV_GALEX");
    assert_eq!(report.status(CheckKind::FilterUsage).state(), State::Pass);
    assert!(report.is_valid());
}

#[test]
fn scenario_misformatted_filter() {
    let report = validator().validate("fuvGALEX");
    let status = report.status(CheckKind::FilterUsage);
    assert_eq!(status.state(), State::Fail);
    assert_eq!(status.message(), Some("FUV_GALEX"));
    assert!(!report.is_valid());
}

#[test]
fn scenario_banned_word() {
    let report = validator().validate("fred_flux");
    let status = report.status(CheckKind::BannedWords);
    assert_eq!(status.state(), State::Fail);
    assert_eq!(status.message(), Some("fred"));
}

#[test]
fn scenario_protected_word() {
    // A single token that is a known mistaken spelling warns.
    let report = validator().validate("ascension_j2000");
    let status = report.status(CheckKind::ProtectedWords);
    assert_eq!(status.state(), State::Warning);
    assert_eq!(status.message(), Some("ra"));

    // The whole name being a mistaken spelling fails.
    let report = validator().validate("ra_deg");
    let status = report.status(CheckKind::ProtectedWords);
    assert_eq!(status.state(), State::Fail);
    assert_eq!(status.message(), Some("ra"));
}

#[test]
fn scenario_structural_failures() {
    let report = validator().validate("123abc");
    assert_eq!(report.status(CheckKind::StartsWithLetter).state(), State::Fail);

    let report = validator().validate("abc.def");
    assert_eq!(report.status(CheckKind::NoDecimals).state(), State::Fail);
}

#[test]
fn snake_case_examples() {
    let lexicon = bundled();
    assert_eq!(check_snake_case("ra_j2000", &lexicon).state(), State::Pass);
    assert_eq!(check_snake_case("_ra", &lexicon).state(), State::Fail);
    assert_eq!(check_snake_case("ra__dec", &lexicon).state(), State::Fail);
}

#[test]
fn every_canonical_filter_passes() {
    let lexicon = bundled();
    for filter in lexicon.filters() {
        let status = filter_status(filter.name(), &lexicon);
        assert_eq!(status.state(), State::Pass, "{}", filter.name());
    }
}

#[test]
fn every_squashed_filter_fails_with_suggestion() {
    let lexicon = bundled();
    for filter in lexicon.filters() {
        let squashed = filter.name().to_lowercase().replace('_', "");
        let status = filter_status(&squashed, &lexicon);
        assert_eq!(status.state(), State::Fail, "{squashed}");
        assert_eq!(status.message(), Some(filter.name()), "{squashed}");
    }
}

#[test]
fn every_reversed_filter_fails_with_suggestion() {
    let lexicon = bundled();
    for filter in lexicon.filters() {
        if !filter.name().contains('_') {
            continue;
        }
        let reversed = reverse_tokens(filter.name());
        let status = filter_status(&reversed, &lexicon);
        assert_eq!(status.state(), State::Fail, "{reversed}");
        assert_eq!(status.message(), Some(filter.name()), "{reversed}");
    }
}

#[test]
fn literal_banned_match_is_never_less_severe_than_fuzzy() {
    let lexicon = bundled();
    let config = NamingConfig::default();
    for word in lexicon.banned_words() {
        let name = format!("{word}_flux");
        let status = check_banned_words(
            &NormalizedName::new(&name, &config.filter_prefixes),
            lexicon.banned_words(),
            config.banned_fuzzy,
        );
        let fuzzy_state = if ratio(word, word) > config.banned_fuzzy.fail {
            State::Fail
        } else {
            State::Warning
        };
        assert!(status.state() >= fuzzy_state, "{name}");
    }
}

proptest! {
    #[test]
    fn validation_is_deterministic(name in "\\PC{0,40}") {
        let validator = validator();
        prop_assert_eq!(validator.validate(&name), validator.validate(&name));
    }

    #[test]
    fn names_containing_a_canonical_filter_pass_filter_usage(
        filter in prop::sample::select(filter_names()),
        prefix in "[a-z_]{0,8}",
        suffix in "[a-z0-9_]{0,8}",
    ) {
        let name = format!("{prefix}{filter}{suffix}");
        let report = validator().validate(&name);
        prop_assert_eq!(report.status(CheckKind::FilterUsage).state(), State::Pass);
    }

    #[test]
    fn ratio_is_symmetric_and_bounded(a in "[a-z0-9]{0,12}", b in "[a-z0-9]{0,12}") {
        let forward = ratio(&a, &b);
        prop_assert_eq!(forward, ratio(&b, &a));
        prop_assert!(forward <= 100);
    }

    #[test]
    fn names_with_dots_never_pass_no_decimals(
        head in "[a-z]{1,10}",
        tail in "[a-z0-9]{0,10}",
    ) {
        let name = format!("{head}.{tail}");
        let report = validator().validate(&name);
        prop_assert_eq!(report.status(CheckKind::NoDecimals).state(), State::Fail);
        prop_assert!(!report.is_valid());
    }
}
