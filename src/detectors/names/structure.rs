//! Structural checks on the raw name: character set, shape and length.
//!
//! An empty name fails every position-dependent check (alphanumeric,
//! starts-with-letter, snake_case) instead of being rejected up front.

use super::config::NamingConfig;
use super::normalizer::NormalizedName;
use crate::core::status::Status;
use crate::lexicon::Lexicon;

/// With underscores removed, the name must be non-empty and alphanumeric.
pub fn check_alphanumeric(name: &NormalizedName<'_>) -> Status {
    let joined = name.joined();
    if !joined.is_empty() && joined.chars().all(char::is_alphanumeric) {
        Status::pass()
    } else {
        Status::fail_bare()
    }
}

/// The first character must be a letter.
pub fn check_starts_with_letter(name: &str) -> Status {
    match name.chars().next() {
        Some(first) if first.is_alphabetic() => Status::pass(),
        _ => Status::fail_bare(),
    }
}

/// The name must not contain a `.`.
pub fn check_no_decimals(name: &str) -> Status {
    if name.contains('.') {
        Status::fail_bare()
    } else {
        Status::pass()
    }
}

/// Compare the character count with the configured limits.
pub fn check_length(name: &str, config: &NamingConfig) -> Status {
    let length = name.chars().count();
    let message = format!("{}/{} characters", length, config.max_length);
    if length < config.warn_length {
        Status::pass_with(message)
    } else if length <= config.max_length {
        Status::warning(message)
    } else {
        Status::fail(message)
    }
}

/// Require lower snake_case outside filter names and exception tokens.
///
/// Whatever is left once filters and exceptions are removed must contain at
/// least one lower-case letter and no upper-case ones, so a leftover such as
/// `_2` in `FUV_GALEX_2` fails.
pub fn check_snake_case(name: &str, lexicon: &Lexicon) -> Status {
    if name.is_empty() {
        return Status::fail("empty name");
    }
    if name.starts_with('_') {
        return Status::fail("leading underscore");
    }
    if name.ends_with('_') {
        return Status::fail("trailing underscore");
    }
    if name.contains("__") {
        return Status::fail("double underscore");
    }

    let mut remainder = name.to_string();
    for filter in lexicon.filters() {
        remainder = remainder.replace(filter.name(), "");
    }
    for exception in lexicon.exceptions() {
        remainder = remainder.replace(exception.name(), "");
    }

    if remainder.is_empty() {
        return Status::pass();
    }
    if remainder.chars().any(char::is_uppercase) {
        return Status::fail("upper-case characters");
    }
    if !remainder.chars().any(char::is_lowercase) {
        return Status::fail("no lower-case letters outside filter names and exceptions");
    }
    if !remainder.chars().all(|c| c == '_' || c.is_alphanumeric()) {
        return Status::fail("characters other than letters, digits and underscores");
    }
    Status::pass()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status::State;

    fn lexicon() -> Lexicon {
        Lexicon::builder()
            .filter("FUV_GALEX")
            .filter("u_SDSS")
            .exception("uberID")
            .build()
            .unwrap()
    }

    fn alphanumeric(name: &str) -> Status {
        check_alphanumeric(&NormalizedName::new(name, &["filter"]))
    }

    #[test]
    fn test_alphanumeric() {
        assert!(alphanumeric("ra_j2000").is_pass());
        assert!(alphanumeric("FUV_GALEX").is_pass());
        assert_eq!(alphanumeric("my-variable").state(), State::Fail);
        assert_eq!(alphanumeric("abc.def").state(), State::Fail);
        assert_eq!(alphanumeric("flux (mJy)").state(), State::Fail);
        assert_eq!(alphanumeric("___").state(), State::Fail);
        assert_eq!(alphanumeric("").state(), State::Fail);
    }

    #[test]
    fn test_starts_with_letter() {
        assert!(check_starts_with_letter("abc123").is_pass());
        assert!(check_starts_with_letter("Flux").is_pass());
        assert_eq!(check_starts_with_letter("123abc").state(), State::Fail);
        assert_eq!(check_starts_with_letter("_ra").state(), State::Fail);
        assert_eq!(check_starts_with_letter("").state(), State::Fail);
    }

    #[test]
    fn test_no_decimals() {
        assert!(check_no_decimals("ra_deg").is_pass());
        assert!(check_no_decimals("").is_pass());
        assert_eq!(check_no_decimals("abc.def").state(), State::Fail);
    }

    #[test]
    fn test_length_bands() {
        let config = NamingConfig::default();

        let status = check_length("ra", &config);
        assert!(status.is_pass());
        assert_eq!(status.message(), Some("2/50 characters"));

        assert!(check_length(&"a".repeat(24), &config).is_pass());
        assert_eq!(check_length(&"a".repeat(25), &config).state(), State::Warning);
        assert_eq!(check_length(&"a".repeat(50), &config).state(), State::Warning);

        let status = check_length(&"a".repeat(51), &config);
        assert_eq!(status.state(), State::Fail);
        assert_eq!(status.message(), Some("51/50 characters"));
    }

    #[test]
    fn test_length_counts_characters() {
        let config = NamingConfig::default();
        let status = check_length("sérsic", &config);
        assert_eq!(status.message(), Some("6/50 characters"));
    }

    #[test]
    fn test_snake_case_shape() {
        let lexicon = lexicon();
        assert!(check_snake_case("ra_j2000", &lexicon).is_pass());
        assert_eq!(check_snake_case("_ra", &lexicon).state(), State::Fail);
        assert_eq!(check_snake_case("ra_", &lexicon).state(), State::Fail);
        assert_eq!(check_snake_case("ra__dec", &lexicon).state(), State::Fail);
        assert_eq!(check_snake_case("", &lexicon).state(), State::Fail);
    }

    #[test]
    fn test_snake_case_casing() {
        let lexicon = lexicon();
        let status = check_snake_case("RaDeg", &lexicon);
        assert_eq!(status.state(), State::Fail);
        assert_eq!(status.message(), Some("upper-case characters"));
        assert_eq!(check_snake_case("my-variable", &lexicon).state(), State::Fail);
    }

    #[test]
    fn test_snake_case_exempts_filters_and_exceptions() {
        let lexicon = lexicon();
        assert!(check_snake_case("FUV_GALEX", &lexicon).is_pass());
        assert!(check_snake_case("mag_u_SDSS", &lexicon).is_pass());
        assert!(check_snake_case("uberID", &lexicon).is_pass());
        assert!(check_snake_case("flux_FUV_GALEX_err", &lexicon).is_pass());
        // Only the exact spelling is exempt.
        assert_eq!(check_snake_case("FUV_Galex", &lexicon).state(), State::Fail);
    }

    #[test]
    fn test_snake_case_needs_lower_case_remainder() {
        let lexicon = lexicon();
        let status = check_snake_case("FUV_GALEX_2", &lexicon);
        assert_eq!(status.state(), State::Fail);
        assert_eq!(
            status.message(),
            Some("no lower-case letters outside filter names and exceptions")
        );
        assert_eq!(check_snake_case("2", &lexicon).state(), State::Fail);
        assert!(check_snake_case("x1", &lexicon).is_pass());
        assert!(check_snake_case("FUV_GALEX_x2", &lexicon).is_pass());
    }
}
