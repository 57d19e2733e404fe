// File: src/core/collator.rs
use crate::core::alphabet::Alphabet;
use crate::core::letter::resolve_char;
use std::cmp::Ordering;

/// Trailing authoring artifact (`": "`) left behind by vocabulary extraction.
const TRAILING_ARTIFACT: char = ':';

/// Character classes in primary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Punctuation,
    Digit,
    Letter,
    OtherLetter,
}

/// A three-level sort key: primary (class, weight), secondary (accent), tertiary (case).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: Vec<(Class, u32)>,
    secondary: Vec<u32>,
    tertiary: Vec<u8>,
}

/// A sorted term: the text as supplied plus the form it was compared by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollatedTerm<'t> {
    pub original: &'t str,
    pub normalized: &'t str,
}

/// Strips surrounding whitespace and one trailing `": "`, whatever whitespace follows it.
pub fn normalize(term: &str) -> &str {
    let term = term.trim_start();
    let body = term.trim_end();
    match body.strip_suffix(TRAILING_ARTIFACT) {
        Some(stripped) if body.len() < term.len() => stripped.trim_end(),
        _ => body,
    }
}

/// Orders terms by a locale's alphabet rather than by code point.
pub struct Collator<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Collator<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.key(normalize(a)).cmp(&self.key(normalize(b)))
    }

    /// Stable sort: terms with identical keys keep their input order.
    pub fn sort<'t, S: AsRef<str>>(&self, terms: &'t [S]) -> Vec<CollatedTerm<'t>> {
        let mut keyed: Vec<(CollationKey, CollatedTerm<'t>)> = terms
            .iter()
            .map(|term| {
                let original = term.as_ref();
                let normalized = normalize(original);
                (self.key(normalized), CollatedTerm { original, normalized })
            })
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.into_iter().map(|(_, term)| term).collect()
    }

    fn key(&self, term: &str) -> CollationKey {
        let mut key = CollationKey {
            primary: Vec::with_capacity(term.len()),
            secondary: Vec::with_capacity(term.len()),
            tertiary: Vec::with_capacity(term.len()),
        };
        for c in term.chars() {
            let lower = c.to_lowercase().next().unwrap_or(c);
            let (primary, secondary) = match resolve_char(c, self.alphabet) {
                Some(letter) => {
                    let weight = self.alphabet.position(letter).unwrap_or_default() as u32;
                    let accent = if letter == lower { 0 } else { lower as u32 };
                    ((Class::Letter, weight), accent)
                }
                None if c.is_whitespace() => ((Class::Space, 0), 0),
                None if c.is_numeric() => ((Class::Digit, c.to_digit(10).unwrap_or(c as u32)), 0),
                None if c.is_alphabetic() => ((Class::OtherLetter, lower as u32), 0),
                None => ((Class::Punctuation, c as u32), 0),
            };
            key.primary.push(primary);
            key.secondary.push(secondary);
            key.tertiary.push(u8::from(c.is_uppercase()));
        }
        key
    }
}
