//! Column-name compliance checks.
//!
//! A candidate name is normalized once, then classified independently by the
//! filter matcher, the lexicon matchers (banned words, protected words,
//! exception casing) and the structural checks. The analyzer collects the
//! nine results into a [`NameReport`].

pub mod analyzer;
pub mod config;
pub mod filters;
pub mod normalizer;
pub mod report;
pub mod similarity;
pub mod structure;
pub mod words;

pub use analyzer::{validate_name, NameValidator};
pub use config::{FuzzyThresholds, NamingConfig};
pub use report::{CheckKind, NameChecks, NameReport};
