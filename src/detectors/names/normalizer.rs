//! Pure string transforms shared by the name matchers.
//!
//! A raw column name is turned into three derived forms:
//! - a *compact* form (lower-cased, `_` and `-` removed, filler prefix
//!   stripped) used for containment and similarity tests,
//! - the `_`-delimited tokens used for per-token comparisons,
//! - the *joined* form (`_` removed, case preserved) used for exception casing.

/// Derived forms of one candidate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName<'a> {
    raw: &'a str,
    compact: String,
    joined: String,
    tokens: Vec<&'a str>,
}

impl<'a> NormalizedName<'a> {
    /// Normalize `raw`, stripping the first matching filler prefix.
    pub fn new<S: AsRef<str>>(raw: &'a str, prefixes: &[S]) -> Self {
        let stripped = strip_filler_prefix(raw, prefixes);
        Self {
            raw,
            compact: compact(stripped),
            joined: raw.replace('_', ""),
            tokens: tokens(raw),
        }
    }

    /// The name exactly as supplied.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Lower-cased, separator-free, prefix-stripped form.
    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// Underscore-free form with the original casing.
    pub fn joined(&self) -> &str {
        &self.joined
    }

    /// Non-empty `_`-delimited tokens of the raw name.
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }
}

/// Lower-case `value` and drop `_` and `-` separators.
pub fn compact(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split on `_`, dropping empty tokens.
pub fn tokens(value: &str) -> Vec<&str> {
    value.split('_').filter(|token| !token.is_empty()).collect()
}

/// Reverse the `_`-delimited token order: `u_SDSS` becomes `SDSS_u`.
pub fn reverse_tokens(value: &str) -> String {
    value.split('_').rev().collect::<Vec<_>>().join("_")
}

/// Remove a leading filler prefix such as `filter` or `band`.
///
/// The prefix is matched case-insensitively and only stripped when the next
/// character of the original string is upper-case, so `filterFUVgalex` loses
/// its prefix while `Band7ALMA` and `filter_width` keep theirs.
pub fn strip_filler_prefix<'a, S: AsRef<str>>(raw: &'a str, prefixes: &[S]) -> &'a str {
    for prefix in prefixes {
        let prefix = prefix.as_ref();
        let prefix_chars = prefix.chars().count();
        if prefix_chars == 0 {
            continue;
        }

        let Some((split_at, next)) = raw.char_indices().nth(prefix_chars) else {
            continue;
        };
        let head = &raw[..split_at];
        if head.to_lowercase() == prefix.to_lowercase() && next.is_uppercase() {
            return &raw[split_at..];
        }
    }
    raw
}
