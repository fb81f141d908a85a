//! Filter matcher: correct use, misuse, or resemblance of controlled filter names.

use tracing::debug;

use super::config::FuzzyThresholds;
use super::normalizer::NormalizedName;
use super::similarity::ratio;
use crate::core::status::Status;
use crate::lexicon::FilterName;

/// Classify `name` against the controlled filter vocabulary.
///
/// Evidence is weighed in a fixed order and the first decisive match wins:
/// 1. a canonical name appears verbatim in the raw name: pass;
/// 2. a canonical name appears once case and separators are ignored: fail;
/// 3. a token-reversed canonical name appears the same way: fail;
/// 4. the whole name resembles a canonical (or reversed) name: warn or fail
///    depending on `thresholds`, suggesting the nearest filter;
/// 5. otherwise the name is not about filters at all: pass.
///
/// Ties go to the filter listed first in the lexicon.
pub fn check_filter(
    name: &NormalizedName<'_>,
    filters: &[FilterName],
    thresholds: FuzzyThresholds,
) -> Status {
    let raw = name.raw();
    if let Some(filter) = filters.iter().find(|filter| raw.contains(filter.name())) {
        debug!("'{}' uses filter '{}' correctly", raw, filter.name());
        return Status::pass();
    }

    let compact = name.compact();
    if compact.is_empty() {
        return Status::pass();
    }

    // Step 1 already ruled out a verbatim match for every filter.
    if let Some(filter) = filters
        .iter()
        .find(|filter| compact.contains(filter.compact()))
    {
        debug!("'{}' misformats filter '{}'", raw, filter.name());
        return Status::fail(filter.name());
    }

    if let Some(filter) = filters
        .iter()
        .find(|filter| compact.contains(filter.inverse_compact()))
    {
        debug!("'{}' reverses filter '{}'", raw, filter.name());
        return Status::fail(filter.name());
    }

    let mut nearest: Option<(&FilterName, u8)> = None;
    for filter in filters {
        let score = ratio(filter.compact(), compact).max(ratio(filter.inverse_compact(), compact));
        if nearest.map_or(true, |(_, best)| score > best) {
            nearest = Some((filter, score));
        }
    }

    match nearest {
        Some((filter, score)) if score > thresholds.fail => {
            debug!("'{}' resembles filter '{}' ({})", raw, filter.name(), score);
            Status::fail(filter.name())
        }
        Some((filter, score)) if score > thresholds.warn => {
            debug!("'{}' may resemble filter '{}' ({})", raw, filter.name(), score);
            Status::warning(filter.name())
        }
        _ => Status::pass(),
    }
}
