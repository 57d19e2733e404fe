// src/lib.rs
//! Locale-aware, alphabetically bucketed vocabulary index.
//!
//! Terms are collated by the locale's alphabet, case-folded unless they are
//! acronyms or glosses, filed under a letter (folding diacritics when the
//! alphabet lacks the accented letter) and grouped into buckets with their links.

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod render;

pub use crate::config::IndexConfig;
pub use crate::core::alphabet::{alphabet, Alphabet};
pub use crate::core::builder::{build, build_locales, IndexBuilder};
pub use crate::core::capitalization::{CapitalizationClassifier, CaseFolding};
pub use crate::core::collator::Collator;
pub use crate::core::letter::file_under;
pub use crate::core::locale::Locale;
pub use crate::core::types::{Bucket, Diagnostic, Entry, Index, IndexBuild, Letter, LinkMap};
pub use crate::error::IndexError;
