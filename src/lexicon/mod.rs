//! Lexicon store: the fixed lookup tables every name check consults.
//!
//! A [`Lexicon`] holds banned words, protected-word synonym groups, the
//! controlled filter vocabulary and exception tokens. It is built once
//! (from YAML, from the bundled default, or through [`LexiconBuilder`]),
//! validated, and then only ever read. Any broken entry aborts loading so
//! names are never checked against a partial vocabulary.

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::core::errors::{ColcheckError, Result, ResultExt};
use crate::detectors::names::normalizer::{compact, reverse_tokens};

const BUNDLED_LEXICON: &str = include_str!("default_lexicon.yaml");

/// On-disk representation of a lexicon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconFile {
    /// Literal words that must not appear in a name
    #[serde(default)]
    pub banned_words: Vec<String>,
    /// Canonical protected word → its common mistaken spellings
    #[serde(default)]
    pub protected_words: LexiconTable<ProtectedWordEntry>,
    /// Canonical filter name → metadata
    #[serde(default)]
    pub filters: LexiconTable<FilterEntry>,
    /// Exception token → metadata
    #[serde(default)]
    pub exceptions: LexiconTable<ExceptionEntry>,
}

/// Ordered `name -> entry` table of a lexicon file.
///
/// Serialized as a YAML mapping. Unlike a map type, repeated keys are kept
/// so that [`Lexicon::from_file`] can reject them instead of letting the
/// last entry win.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconTable<V>(Vec<(String, V)>);

impl<V> LexiconTable<V> {
    /// Append an entry, keeping any earlier entry with the same name.
    pub fn push(&mut self, name: impl Into<String>, entry: V) {
        self.0.push((name.into(), entry));
    }

    /// Number of entries, repeats included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.0.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

impl<V> Default for LexiconTable<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> FromIterator<(String, V)> for LexiconTable<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<V> IntoIterator for LexiconTable<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: Serialize> Serialize for LexiconTable<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, entry)| (name, entry)))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for LexiconTable<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TableVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for TableVisitor<V> {
            type Value = LexiconTable<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping of lexicon entries")
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(LexiconTable::default())
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(LexiconTable(entries))
            }
        }

        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

/// Protected word metadata as written in the lexicon file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtectedWordEntry {
    /// Spellings that should be replaced by the canonical word
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    /// Unified Content Descriptor(s), `;`-separated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ucd: Option<String>,
    /// Physical unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Filter metadata as written in the lexicon file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterEntry {
    /// Spectral UCD attached to columns measured in this filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_ucd: Option<String>,
}

/// Exception token metadata as written in the lexicon file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExceptionEntry {
    /// Unified Content Descriptor(s), `;`-separated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ucd: Option<String>,
    /// Physical unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A physical-quantity keyword and the spellings that collide with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedWord {
    name: String,
    common_mistakes: Vec<String>,
    ucd: Option<String>,
    unit: Option<String>,
}

impl ProtectedWord {
    /// Canonical token, e.g. `ra`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mistaken spellings, in lexicon order.
    pub fn common_mistakes(&self) -> &[String] {
        &self.common_mistakes
    }

    /// UCD string, if known.
    pub fn ucd(&self) -> Option<&str> {
        self.ucd.as_deref()
    }

    /// Unit, if known.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

/// A controlled filter name with its precomputed comparison forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterName {
    name: String,
    inverse_name: String,
    compact: String,
    inverse_compact: String,
    secondary_ucd: Option<String>,
}

impl FilterName {
    fn new(name: String, secondary_ucd: Option<String>) -> Self {
        let inverse_name = reverse_tokens(&name);
        Self {
            compact: compact(&name),
            inverse_compact: compact(&inverse_name),
            inverse_name,
            name,
            secondary_ucd,
        }
    }

    /// Canonical spelling, e.g. `u_SDSS`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token-reversed spelling, e.g. `SDSS_u`.
    pub fn inverse_name(&self) -> &str {
        &self.inverse_name
    }

    /// Lower-cased separator-free canonical form, e.g. `usdss`.
    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// Lower-cased separator-free reversed form, e.g. `sdssu`.
    pub fn inverse_compact(&self) -> &str {
        &self.inverse_compact
    }

    /// Spectral UCD, if known.
    pub fn secondary_ucd(&self) -> Option<&str> {
        self.secondary_ucd.as_deref()
    }
}

/// A token exempt from snake_case that must keep one exact casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionWord {
    name: String,
    ucd: Option<String>,
    unit: Option<String>,
}

impl ExceptionWord {
    /// Mandated spelling, e.g. `uberID`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// UCD string, if known.
    pub fn ucd(&self) -> Option<&str> {
        self.ucd.as_deref()
    }

    /// Unit, if known.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

/// Immutable lookup tables for the name checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    banned_words: Vec<String>,
    protected_words: Vec<ProtectedWord>,
    filters: Vec<FilterName>,
    exceptions: Vec<ExceptionWord>,
}

impl Lexicon {
    /// The lexicon compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_yaml_str(BUNDLED_LEXICON)
            .map_err(|e| ColcheckError::internal(format!("Bundled lexicon is invalid: {e}")))
    }

    /// YAML text of the bundled lexicon.
    pub fn bundled_yaml() -> &'static str {
        BUNDLED_LEXICON
    }

    /// Load a lexicon from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading lexicon from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            ColcheckError::io(format!("Failed to read lexicon file: {}", path.display()), e)
        })?;
        Self::from_yaml_str(&content).with_context(|| path.display().to_string())
    }

    /// Parse and validate a lexicon from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: LexiconFile = serde_yaml::from_str(content)?;
        Self::from_file(file)
    }

    /// Validate raw tables and build the lexicon.
    pub fn from_file(file: LexiconFile) -> Result<Self> {
        let mut seen_banned = HashSet::new();
        for word in &file.banned_words {
            if word.is_empty() {
                return Err(ColcheckError::lexicon("banned words must not be empty"));
            }
            if !seen_banned.insert(word.as_str()) {
                return Err(ColcheckError::lexicon_entry("duplicate banned word", word));
            }
        }

        let mut seen_protected = HashSet::new();
        let mut protected_words = Vec::with_capacity(file.protected_words.len());
        for (name, entry) in file.protected_words {
            if name.is_empty() {
                return Err(ColcheckError::lexicon("protected words must not be empty"));
            }
            if !seen_protected.insert(name.clone()) {
                return Err(ColcheckError::lexicon_entry("duplicate protected word", &name));
            }
            for mistake in &entry.common_mistakes {
                if mistake.is_empty() {
                    return Err(ColcheckError::lexicon_entry(
                        "common mistakes must not be empty",
                        &name,
                    ));
                }
                if *mistake == name {
                    return Err(ColcheckError::lexicon_entry(
                        "protected word lists itself as a common mistake",
                        &name,
                    ));
                }
            }
            protected_words.push(ProtectedWord {
                name,
                common_mistakes: entry.common_mistakes,
                ucd: entry.ucd,
                unit: entry.unit,
            });
        }

        let mut seen_filters = HashSet::new();
        let mut filters = Vec::with_capacity(file.filters.len());
        for (name, entry) in file.filters {
            if name.is_empty() || compact(&name).is_empty() {
                return Err(ColcheckError::lexicon_entry(
                    "filter names need at least one character besides separators",
                    &name,
                ));
            }
            if !seen_filters.insert(name.clone()) {
                return Err(ColcheckError::lexicon_entry("duplicate filter", &name));
            }
            filters.push(FilterName::new(name, entry.secondary_ucd));
        }

        let mut seen_exceptions = HashSet::new();
        let mut exceptions = Vec::with_capacity(file.exceptions.len());
        for (name, entry) in file.exceptions {
            if name.is_empty() {
                return Err(ColcheckError::lexicon("exception tokens must not be empty"));
            }
            if !seen_exceptions.insert(name.clone()) {
                return Err(ColcheckError::lexicon_entry("duplicate exception", &name));
            }
            exceptions.push(ExceptionWord {
                name,
                ucd: entry.ucd,
                unit: entry.unit,
            });
        }

        debug!(
            banned = file.banned_words.len(),
            protected = protected_words.len(),
            filters = filters.len(),
            exceptions = exceptions.len(),
            "Lexicon loaded"
        );

        Ok(Self {
            banned_words: file.banned_words,
            protected_words,
            filters,
            exceptions,
        })
    }

    /// Start building a lexicon in code (mostly for fixtures).
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Banned words, in lexicon order.
    pub fn banned_words(&self) -> &[String] {
        &self.banned_words
    }

    /// Protected words, in lexicon order.
    pub fn protected_words(&self) -> &[ProtectedWord] {
        &self.protected_words
    }

    /// Controlled filter vocabulary, in lexicon order.
    pub fn filters(&self) -> &[FilterName] {
        &self.filters
    }

    /// Exception tokens, in lexicon order.
    pub fn exceptions(&self) -> &[ExceptionWord] {
        &self.exceptions
    }

    /// Convert back to the on-disk representation.
    pub fn to_file(&self) -> LexiconFile {
        LexiconFile {
            banned_words: self.banned_words.clone(),
            protected_words: self
                .protected_words
                .iter()
                .map(|word| {
                    (
                        word.name.clone(),
                        ProtectedWordEntry {
                            common_mistakes: word.common_mistakes.clone(),
                            ucd: word.ucd.clone(),
                            unit: word.unit.clone(),
                        },
                    )
                })
                .collect(),
            filters: self
                .filters
                .iter()
                .map(|filter| {
                    (
                        filter.name.clone(),
                        FilterEntry {
                            secondary_ucd: filter.secondary_ucd.clone(),
                        },
                    )
                })
                .collect(),
            exceptions: self
                .exceptions
                .iter()
                .map(|exception| {
                    (
                        exception.name.clone(),
                        ExceptionEntry {
                            ucd: exception.ucd.clone(),
                            unit: exception.unit.clone(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.to_file())?)
    }
}

/// Incremental construction of a [`Lexicon`].
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    file: LexiconFile,
}

impl LexiconBuilder {
    /// Add a banned word.
    pub fn banned_word(mut self, word: impl Into<String>) -> Self {
        self.file.banned_words.push(word.into());
        self
    }

    /// Add a protected word with its common mistakes.
    pub fn protected_word<I, S>(mut self, name: impl Into<String>, mistakes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file.protected_words.push(
            name,
            ProtectedWordEntry {
                common_mistakes: mistakes.into_iter().map(Into::into).collect(),
                ..Default::default()
            },
        );
        self
    }

    /// Add a controlled filter name.
    pub fn filter(mut self, name: impl Into<String>) -> Self {
        self.file.filters.push(name, FilterEntry::default());
        self
    }

    /// Add an exception token.
    pub fn exception(mut self, name: impl Into<String>) -> Self {
        self.file.exceptions.push(name, ExceptionEntry::default());
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<Lexicon> {
        Lexicon::from_file(self.file)
    }
}
