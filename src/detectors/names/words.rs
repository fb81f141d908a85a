//! Lexicon matcher: banned words, protected words and exception casing.

use tracing::debug;

use super::config::FuzzyThresholds;
use super::normalizer::NormalizedName;
use super::similarity::ratio;
use crate::core::status::Status;
use crate::lexicon::{ExceptionWord, ProtectedWord};

/// Reject placeholder words.
///
/// A literal pass over every banned word runs first; only when none appears
/// verbatim does the fuzzy pass compare each banned word with each token.
/// The message is always the offending banned word.
pub fn check_banned_words(
    name: &NormalizedName<'_>,
    banned_words: &[String],
    thresholds: FuzzyThresholds,
) -> Status {
    let raw = name.raw();
    if let Some(word) = banned_words.iter().find(|word| raw.contains(word.as_str())) {
        debug!("'{}' contains banned word '{}'", raw, word);
        return Status::fail(word.as_str());
    }

    for word in banned_words {
        for token in name.tokens() {
            let score = ratio(word, &token.to_lowercase());
            if score > thresholds.fail {
                debug!("'{}' resembles banned word '{}' ({})", raw, word, score);
                return Status::fail(word.as_str());
            }
            if score > thresholds.warn {
                debug!("'{}' may resemble banned word '{}' ({})", raw, word, score);
                return Status::warning(word.as_str());
            }
        }
    }

    Status::pass()
}

/// Flag known mistaken spellings of protected physical-quantity words.
///
/// The whole name being a mistaken spelling fails; a single token matching
/// one (ignoring case) warns. The message is the canonical word.
pub fn check_protected_words(name: &NormalizedName<'_>, protected: &[ProtectedWord]) -> Status {
    let raw = name.raw();
    let tokens: Vec<String> = name.tokens().iter().map(|t| t.to_lowercase()).collect();

    for word in protected {
        for mistake in word.common_mistakes() {
            if raw == mistake {
                debug!("'{}' is a mistaken spelling of '{}'", raw, word.name());
                return Status::fail(word.name());
            }
            let mistake = mistake.to_lowercase();
            if tokens.iter().any(|token| *token == mistake) {
                debug!("'{}' contains a mistaken spelling of '{}'", raw, word.name());
                return Status::warning(word.name());
            }
        }
    }

    Status::pass()
}

/// Enforce the mandated casing of exception tokens.
///
/// Only the first exception found (ignoring case) in the underscore-free
/// name is judged.
pub fn check_exceptions(name: &NormalizedName<'_>, exceptions: &[ExceptionWord]) -> Status {
    let joined = name.joined();
    let joined_lower = joined.to_lowercase();

    for exception in exceptions {
        if joined_lower.contains(&exception.name().to_lowercase()) {
            if joined.contains(exception.name()) {
                return Status::pass();
            }
            debug!("'{}' miscases exception '{}'", name.raw(), exception.name());
            return Status::fail(exception.name());
        }
    }

    Status::pass()
}
