// File: src/core/capitalization.rs
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Acronyms and proper terms, English and Spanish, that keep their authored casing.
pub const DEFAULT_EXCEPTIONS: &[&str] = &[
    "IP",
    "DDoS",
    "SSL",
    "TLS",
    "TCP",
    "IA",
    "IPA",
    "PCT",
    "PI",
    "AI",
    "ADT",
    "API",
    "Creative Commons",
    "ISPs",
    "Commons",
    "Creative",
    "Boolean",
    "Booleano",
];

/// How ordinary (non-excepted) terms are case-folded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseFolding {
    /// The whole term is either kept verbatim or lower-cased, sparing only a non-ASCII leading letter.
    #[default]
    WholeTerm,
    /// Every word is lower-cased unless the word itself is an exception.
    PerWord,
}

/// Decides whether a term keeps its authored casing and produces its display form.
#[derive(Debug, Clone)]
pub struct CapitalizationClassifier {
    exceptions: Vec<String>,
    folding: CaseFolding,
}

impl Default for CapitalizationClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_EXCEPTIONS.iter().map(|s| s.to_string()), CaseFolding::default())
    }
}

impl CapitalizationClassifier {
    pub fn new(exceptions: impl IntoIterator<Item = String>, folding: CaseFolding) -> Self {
        Self {
            exceptions: exceptions.into_iter().filter(|e| !e.is_empty()).collect(),
            folding,
        }
    }

    pub fn folding(&self) -> CaseFolding {
        self.folding
    }

    /// True if `term` contains any exception as a substring, or a parenthesised gloss.
    ///
    /// Substring matching is deliberately loose: `"API (Application ...)"` must
    /// match `API`, at the price of also matching e.g. `"SHIP"` through `IP`.
    pub fn should_keep_original_case(&self, term: &str) -> bool {
        self.exceptions.iter().any(|e| term.contains(e.as_str())) || has_parenthetical(term)
    }

    /// The form a term is displayed and filed under.
    pub fn display_form<'t>(&self, term: &'t str) -> Cow<'t, str> {
        match self.folding {
            CaseFolding::WholeTerm => {
                if self.should_keep_original_case(term) {
                    Cow::Borrowed(term)
                } else {
                    fold_case(term)
                }
            }
            CaseFolding::PerWord => Cow::Owned(
                term.split_whitespace()
                    .map(|word| {
                        if self.exceptions.iter().any(|e| e == word) {
                            word.to_string()
                        } else {
                            word.to_lowercase()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

/// Lower-cases every letter except a non-ASCII leading one (`Índice` stays `Índice`).
fn fold_case(term: &str) -> Cow<'_, str> {
    let mut chars = term.chars();
    let Some(first) = chars.next() else {
        return Cow::Borrowed(term);
    };
    let mut folded = String::with_capacity(term.len());
    folded.push(if first.is_ascii() { first.to_ascii_lowercase() } else { first });
    folded.extend(chars.flat_map(char::to_lowercase));
    if folded == term {
        Cow::Borrowed(term)
    } else {
        Cow::Owned(folded)
    }
}

/// Matches an open paren followed, at some distance of at least one character, by a close paren.
fn has_parenthetical(term: &str) -> bool {
    let Some(open) = term.find('(') else {
        return false;
    };
    term[open + 1..]
        .char_indices()
        .any(|(offset, c)| offset > 0 && c == ')')
}
