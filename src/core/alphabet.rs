// File: src/core/alphabet.rs
use crate::core::locale::Locale;
use crate::core::types::Letter;
use std::collections::HashMap;

/// The ordered, lower-case letters an index is bucketed under.
///
/// Built once per index build; letter lookups are O(1) through the position table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<Letter>,
    positions: HashMap<Letter, usize>,
}

impl Alphabet {
    pub fn for_locale(locale: &Locale) -> Self {
        let letters = match locale.code() {
            "es" => ('a'..='n').chain(['ñ']).chain('o'..='z').collect(),
            _ => ('a'..='z').collect(),
        };
        Self::from_letters(letters)
    }

    fn from_letters(letters: Vec<Letter>) -> Self {
        let positions = letters
            .iter()
            .enumerate()
            .map(|(position, &letter)| (letter, position))
            .collect();
        Self { letters, positions }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.positions.contains_key(&letter)
    }

    pub fn position(&self, letter: Letter) -> Option<usize> {
        self.positions.get(&letter).copied()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Returns the ordered alphabet for `locale`, falling back to `a..z`.
pub fn alphabet(locale: &Locale) -> Alphabet {
    Alphabet::for_locale(locale)
}
