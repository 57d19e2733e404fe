// src/core/types.rs
use crate::core::locale::Locale;
use crate::error::IndexError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single lower-case alphabet letter terms are filed under.
pub type Letter = char;

/// Maps an exact, as-supplied vocabulary term to the pages that define it.
///
/// Every entry holds at least one link; lookups are always by the original
/// term text, never by its display form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMap {
    links: HashMap<String, Vec<String>>,
}

impl LinkMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, term: impl Into<String>, links: Vec<String>) -> Result<(), IndexError> {
        let term = term.into();
        if links.is_empty() {
            return Err(IndexError::EmptyLinks { term });
        }
        self.links.insert(term, links);
        Ok(())
    }

    pub fn get(&self, term: &str) -> Option<&[String]> {
        self.links.get(term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.links.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl TryFrom<HashMap<String, Vec<String>>> for LinkMap {
    type Error = IndexError;

    fn try_from(links: HashMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        if let Some((term, _)) = links.iter().find(|(_, targets)| targets.is_empty()) {
            return Err(IndexError::EmptyLinks { term: term.clone() });
        }
        Ok(Self { links })
    }
}

/// One index line: a term as displayed plus the pages defining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub term: String,
    /// The term as supplied, i.e. its link map key.
    pub source: String,
    pub links: Vec<String>,
}

/// All entries filed under one letter, in collation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub letter: Letter,
    pub entries: Vec<Entry>,
}

impl Bucket {
    pub fn new(letter: Letter) -> Self {
        Self { letter, entries: Vec::new() }
    }

    /// Upper-case letter used for headings and anchors.
    pub fn heading(&self) -> String {
        self.letter.to_uppercase().collect()
    }
}

/// The finished vocabulary index for one locale. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    locale: Locale,
    buckets: Vec<Bucket>,
    used_letters: Vec<Letter>,
}

impl Index {
    pub(crate) fn new(locale: Locale, buckets: Vec<Bucket>) -> Self {
        let used_letters = buckets.iter().map(|b| b.letter).collect();
        Self { locale, buckets, used_letters }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn used_letters(&self) -> &[Letter] {
        &self.used_letters
    }

    pub fn bucket(&self, letter: Letter) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.letter == letter)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.buckets.iter().flat_map(|b| b.entries.iter())
    }

    pub fn entry_count(&self) -> usize {
        self.buckets.iter().map(|b| b.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// A non-fatal, per-term problem found while building an index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("no index letter for vocab term {term:?} in locale {locale}")]
    UnresolvableLetter { term: String, locale: String },
    #[error("no URL mapping found for vocab term {term:?}")]
    MissingLink { term: String },
}

impl Diagnostic {
    /// The term as originally supplied.
    pub fn term(&self) -> &str {
        match self {
            Diagnostic::UnresolvableLetter { term, .. } | Diagnostic::MissingLink { term } => term,
        }
    }
}

/// An index together with the diagnostics produced while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexBuild {
    pub index: Index,
    pub diagnostics: Vec<Diagnostic>,
}

impl IndexBuild {
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
