//! Local UCD (Unified Content Descriptor) guessing from the lexicon.

use serde::{Deserialize, Serialize};

use crate::io::table::Table;
use crate::lexicon::Lexicon;

/// Guess the UCD string for a column name.
///
/// Exception tokens and filter names count when they appear anywhere in the
/// name. Protected words containing `_` count on containment as well; the
/// others only when they equal a whole `_`-token. Every contributing UCD is
/// split on `;`, duplicates are dropped keeping first occurrence, and the
/// atoms are joined with `;`.
pub fn guess_ucd(name: &str, lexicon: &Lexicon) -> Option<String> {
    let mut found: Vec<&str> = Vec::new();

    for exception in lexicon.exceptions() {
        if name.contains(exception.name()) {
            found.extend(exception.ucd());
        }
    }

    for word in lexicon.protected_words() {
        let matched = if word.name().contains('_') {
            name.contains(word.name())
        } else {
            name.split('_').any(|token| token == word.name())
        };
        if matched {
            found.extend(word.ucd());
        }
    }

    for filter in lexicon.filters() {
        if name.contains(filter.name()) {
            found.extend(filter.secondary_ucd());
        }
    }

    let mut atoms: Vec<&str> = Vec::new();
    for atom in found.iter().flat_map(|ucd| ucd.split(';')) {
        if !atom.is_empty() && !atoms.contains(&atom) {
            atoms.push(atom);
        }
    }

    if atoms.is_empty() {
        None
    } else {
        Some(atoms.join(";"))
    }
}

/// Metadata inferred for one column of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Column name
    pub name: String,
    /// Guessed UCD, if any lexicon entry matched
    pub ucd: Option<String>,
    /// Smallest non-null value
    pub min: Option<f64>,
    /// Largest non-null value
    pub max: Option<f64>,
}

/// Infer UCDs and value ranges for every column of `table`.
pub fn describe_columns(table: &Table, lexicon: &Lexicon) -> Vec<ColumnMetadata> {
    table
        .columns()
        .map(|(name, values)| {
            let mut present = values.iter().flatten().copied();
            let (min, max) = match present.next() {
                Some(first) => {
                    let (min, max) = present.fold((first, first), |(lo, hi), value| {
                        (lo.min(value), hi.max(value))
                    });
                    (Some(min), Some(max))
                }
                None => (None, None),
            };
            ColumnMetadata {
                name: name.to_string(),
                ucd: guess_ucd(name, lexicon),
                min,
                max,
            }
        })
        .collect()
}
