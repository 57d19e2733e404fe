// File: src/core/locale.rs
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LOCALE: &str = "en";

/// Locales the site publishes an index for.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "es"];

const INDEX_FILE_STEM: &str = "vocab-index";

/// A language identifier selecting an alphabet and collation behaviour.
///
/// Only the primary language subtag is kept, so `es-MX`, `ES` and `es_419`
/// all select the Spanish alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale {
    code: String,
}

impl Locale {
    pub fn parse(code: &str) -> Self {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if primary.is_empty() {
            return Self::default();
        }
        Self { code: primary }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Unknown locales still build (against the plain Latin alphabet); strict
    /// callers should check this first.
    pub fn is_supported(&self) -> bool {
        SUPPORTED_LOCALES.contains(&self.code.as_str())
    }

    /// `""` for the default locale, `".es"` style otherwise.
    pub fn file_suffix(&self) -> String {
        if self.code == DEFAULT_LOCALE {
            String::new()
        } else {
            format!(".{}", self.code)
        }
    }

    pub fn index_file_stem(&self) -> String {
        format!("{}{}", INDEX_FILE_STEM, self.file_suffix())
    }

    pub fn index_file_name(&self) -> String {
        format!("{}.html", self.index_file_stem())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            code: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
