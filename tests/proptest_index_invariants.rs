//! Property-based invariant tests for index building.
//!
//! 1. Alphabets are lower-case and duplicate-free for every locale
//! 2. Every bucket letter belongs to the locale alphabet
//! 3. Buckets appear in strictly increasing alphabet order
//! 4. Entries keep the collator's relative order
//! 5. Included entries carry exactly the link map's value for their source term
//! 6. Building twice gives identical output
//! 7. Every non-blank term is either indexed or named by exactly one diagnostic
//! 8. Repeated terms are indexed or reported once per occurrence

use proptest::prelude::*;
use vocab_index::core::collator::{normalize, Collator};
use vocab_index::{alphabet, build, IndexBuild, LinkMap, Locale};

// ── Helpers ──────────────────────────────────────────────────────────

fn locale_strategy() -> impl Strategy<Value = Locale> {
    prop_oneof![
        Just(Locale::parse("en")),
        Just(Locale::parse("es")),
        Just(Locale::parse("fr")),
    ]
}

fn term_strategy() -> impl Strategy<Value = String> {
    "[a-zA-ZñÑáéíóúÍ0-9 ():]{0,12}"
}

fn vocabulary() -> impl Strategy<Value = (Vec<String>, Vec<bool>)> {
    prop::collection::vec((term_strategy(), any::<bool>()), 0..24)
        .prop_map(|pairs| -> (Vec<String>, Vec<bool>) { pairs.into_iter().unzip() })
}

/// Small pool so vocabularies regularly repeat terms, exactly or up to case/artifacts.
fn pooled_vocabulary() -> impl Strategy<Value = (Vec<String>, Vec<bool>)> {
    let pool: Vec<String> = [
        "loop", "Loop", "loop: ", "LOOP", "lista", "ñu", "Índice", "índice", "API (Interfaz)", "2D",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    prop::collection::vec((prop::sample::select(pool), any::<bool>()), 0..24)
        .prop_map(|pairs| -> (Vec<String>, Vec<bool>) { pairs.into_iter().unzip() })
}

fn link_map(terms: &[String], mapped: &[bool]) -> LinkMap {
    let mut links = LinkMap::new();
    for (i, (term, &is_mapped)) in terms.iter().zip(mapped).enumerate() {
        if is_mapped {
            links.insert(term.clone(), vec![format!("/page{i}.html")]).unwrap();
        }
    }
    links
}

fn run(terms: &[String], mapped: &[bool], locale: &Locale) -> (LinkMap, IndexBuild) {
    let links = link_map(terms, mapped);
    let out = build(terms, &links, locale);
    (links, out)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Alphabet invariant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn alphabets_are_lowercase_and_unique(code in "[a-zA-Z_-]{0,8}") {
        let letters = alphabet(&Locale::parse(&code)).letters().to_vec();
        prop_assert!(!letters.is_empty());
        for (i, l) in letters.iter().enumerate() {
            prop_assert!(!l.is_uppercase(), "{:?} is upper-case", l);
            prop_assert!(!letters[i + 1..].contains(l), "{:?} repeated", l);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2 & 3. Total filing, ordered buckets
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn buckets_use_alphabet_letters_in_order((terms, mapped) in vocabulary(), locale in locale_strategy()) {
        let (_, out) = run(&terms, &mapped, &locale);
        let alphabet = alphabet(&locale);
        let positions: Vec<usize> = out
            .index
            .buckets()
            .iter()
            .map(|b| alphabet.position(b.letter).expect("bucket letter outside alphabet"))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
        let letters: Vec<char> = out.index.buckets().iter().map(|b| b.letter).collect();
        prop_assert_eq!(out.index.used_letters(), letters.as_slice());
        prop_assert!(out.index.buckets().iter().all(|b| !b.entries.is_empty()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Stable grouping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn entries_follow_collation_order((terms, mapped) in vocabulary(), locale in locale_strategy()) {
        let (_, out) = run(&terms, &mapped, &locale);
        let alphabet = alphabet(&locale);
        let collator = Collator::new(&alphabet);
        let entries: Vec<_> = out.index.entries().collect();
        for pair in entries.windows(2) {
            prop_assert_ne!(
                collator.compare(&pair[0].source, &pair[1].source),
                std::cmp::Ordering::Greater,
                "{:?} listed before {:?}", pair[0].source, pair[1].source
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Link-preserving lookup
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn entries_keep_their_links((terms, mapped) in vocabulary(), locale in locale_strategy()) {
        let (links, out) = run(&terms, &mapped, &locale);
        for entry in out.index.entries() {
            prop_assert_eq!(links.get(&entry.source), Some(entry.links.as_slice()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn builds_are_deterministic((terms, mapped) in vocabulary(), locale in locale_strategy()) {
        let (links, first) = run(&terms, &mapped, &locale);
        let second = build(&terms, &links, &locale);
        prop_assert_eq!(first, second);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Exclusion reporting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_term_is_indexed_or_reported((terms, mapped) in vocabulary(), locale in locale_strategy()) {
        let (links, out) = run(&terms, &mapped, &locale);
        let non_blank = terms.iter().filter(|t| !normalize(t).is_empty()).count();
        prop_assert_eq!(out.index.entry_count() + out.diagnostics.len(), non_blank);
        for diagnostic in &out.diagnostics {
            if let vocab_index::Diagnostic::MissingLink { term } = diagnostic {
                prop_assert!(!links.contains(term));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Repeated terms
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn repeated_terms_are_counted_per_occurrence((terms, mapped) in pooled_vocabulary(), locale in locale_strategy()) {
        let (links, out) = run(&terms, &mapped, &locale);
        for term in &terms {
            let occurrences = terms.iter().filter(|t| *t == term).count();
            let indexed = out.index.entries().filter(|e| &e.source == term).count();
            let reported = out.diagnostics.iter().filter(|d| d.term() == term.as_str()).count();
            prop_assert_eq!(indexed + reported, occurrences, "term {:?}", term);
            if links.contains(term) && indexed > 0 {
                prop_assert_eq!(reported, 0);
            }
        }
        for entry in out.index.entries() {
            prop_assert_eq!(links.get(&entry.source), Some(entry.links.as_slice()));
        }
        let letters = out.index.used_letters();
        prop_assert!(letters.iter().enumerate().all(|(i, l)| !letters[i + 1..].contains(l)));
    }
}
