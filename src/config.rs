// File: src/config.rs
use crate::core::capitalization::{CapitalizationClassifier, CaseFolding, DEFAULT_EXCEPTIONS};
use crate::core::locale::{Locale, SUPPORTED_LOCALES};
use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Site-level settings for index generation. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Terms containing any of these keep their authored casing.
    pub exceptions: Vec<String>,
    pub case_folding: CaseFolding,
    /// Locales to build when none are given explicitly.
    pub locales: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            exceptions: DEFAULT_EXCEPTIONS.iter().map(|s| s.to_string()).collect(),
            case_folding: CaseFolding::default(),
            locales: SUPPORTED_LOCALES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl IndexConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| IndexError::Json {
            what: "config",
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn classifier(&self) -> CapitalizationClassifier {
        CapitalizationClassifier::new(self.exceptions.iter().cloned(), self.case_folding)
    }

    /// Configured locales, deduplicated. Unsupported ones are kept with a warning.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = Vec::with_capacity(self.locales.len());
        for code in &self.locales {
            let locale = Locale::parse(code);
            if !locale.is_supported() {
                tracing::warn!(%locale, "locale has no dedicated alphabet, using the Latin default");
            }
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        locales
    }
}
