//! Per-name compliance report.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::status::{State, Status};

/// One dimension of the name compliance checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Only letters, digits and underscores
    Alphanumeric,
    /// First character is a letter
    StartsWithLetter,
    /// Lower snake_case outside filters and exceptions
    SnakeCase,
    /// Length against the warn and max limits
    Length,
    /// No `.` in the name
    NoDecimals,
    /// Filters spelled as in the controlled vocabulary
    FilterUsage,
    /// No banned or near-banned words
    BannedWords,
    /// Exception tokens in their exact casing
    ExceptionCasing,
    /// No mistaken spellings of protected words
    ProtectedWords,
}

impl CheckKind {
    /// Every dimension, in report order.
    pub const ALL: [CheckKind; 9] = [
        CheckKind::Alphanumeric,
        CheckKind::StartsWithLetter,
        CheckKind::SnakeCase,
        CheckKind::Length,
        CheckKind::NoDecimals,
        CheckKind::FilterUsage,
        CheckKind::BannedWords,
        CheckKind::ExceptionCasing,
        CheckKind::ProtectedWords,
    ];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            CheckKind::Alphanumeric => "Alphanumeric",
            CheckKind::StartsWithLetter => "Starts with letter",
            CheckKind::SnakeCase => "Snake case",
            CheckKind::Length => "Length",
            CheckKind::NoDecimals => "No decimals",
            CheckKind::FilterUsage => "Filter usage",
            CheckKind::BannedWords => "Banned words",
            CheckKind::ExceptionCasing => "Exception casing",
            CheckKind::ProtectedWords => "Protected words",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The nine check results for one name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameChecks {
    /// See [`CheckKind::Alphanumeric`]
    pub alphanumeric: Status,
    /// See [`CheckKind::StartsWithLetter`]
    pub starts_with_letter: Status,
    /// See [`CheckKind::SnakeCase`]
    pub snake_case: Status,
    /// See [`CheckKind::Length`]
    pub length: Status,
    /// See [`CheckKind::NoDecimals`]
    pub no_decimals: Status,
    /// See [`CheckKind::FilterUsage`]
    pub filter_usage: Status,
    /// See [`CheckKind::BannedWords`]
    pub banned_words: Status,
    /// See [`CheckKind::ExceptionCasing`]
    pub exception_casing: Status,
    /// See [`CheckKind::ProtectedWords`]
    pub protected_words: Status,
}

impl NameChecks {
    /// Result of one dimension.
    pub fn get(&self, kind: CheckKind) -> &Status {
        match kind {
            CheckKind::Alphanumeric => &self.alphanumeric,
            CheckKind::StartsWithLetter => &self.starts_with_letter,
            CheckKind::SnakeCase => &self.snake_case,
            CheckKind::Length => &self.length,
            CheckKind::NoDecimals => &self.no_decimals,
            CheckKind::FilterUsage => &self.filter_usage,
            CheckKind::BannedWords => &self.banned_words,
            CheckKind::ExceptionCasing => &self.exception_casing,
            CheckKind::ProtectedWords => &self.protected_words,
        }
    }

    /// All dimensions with their results, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (CheckKind, &Status)> + '_ {
        CheckKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Compliance report for a single column name.
///
/// `valid` is derived once from the checks and the report is never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameReport {
    name: String,
    #[serde(flatten)]
    checks: NameChecks,
    valid: bool,
}

impl NameReport {
    /// Build a report; validity is fixed here from the nine statuses.
    pub fn new(name: impl Into<String>, checks: NameChecks) -> Self {
        let valid = checks.iter().all(|(_, status)| status.is_pass());
        Self {
            name: name.into(),
            checks,
            valid,
        }
    }

    /// The name as checked.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All nine statuses.
    pub fn checks(&self) -> &NameChecks {
        &self.checks
    }

    /// Status of one dimension.
    pub fn status(&self, kind: CheckKind) -> &Status {
        self.checks.get(kind)
    }

    /// All dimensions with their results, in report order.
    pub fn dimensions(&self) -> impl Iterator<Item = (CheckKind, &Status)> + '_ {
        self.checks.iter()
    }

    /// True only when every dimension passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Most severe state across all dimensions.
    pub fn worst_state(&self) -> State {
        self.dimensions()
            .map(|(_, status)| status.state())
            .max()
            .unwrap_or(State::Pass)
    }

    /// Dimensions that did not pass.
    pub fn issues(&self) -> impl Iterator<Item = (CheckKind, &Status)> + '_ {
        self.dimensions().filter(|(_, status)| !status.is_pass())
    }
}
