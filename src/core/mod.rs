// src/core/mod.rs

pub mod alphabet;
pub mod builder;
pub mod capitalization;
pub mod collator;
pub mod letter;
pub mod locale;
pub mod transliterate;
pub mod types;
