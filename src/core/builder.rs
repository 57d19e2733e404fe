use crate::config::IndexConfig;
use crate::core::alphabet::Alphabet;
use crate::core::capitalization::CapitalizationClassifier;
use crate::core::collator::{normalize, Collator};
use crate::core::letter::file_under;
use crate::core::locale::Locale;
use crate::core::types::{Bucket, Diagnostic, Entry, Index, IndexBuild, LinkMap};

/// Builds the vocabulary index for a single locale.
///
/// The alphabet is computed once here and reused for every term of a build.
pub struct IndexBuilder {
    locale: Locale,
    alphabet: Alphabet,
    classifier: CapitalizationClassifier,
}

impl IndexBuilder {
    pub fn new(locale: Locale, config: &IndexConfig) -> Self {
        Self::with_classifier(locale, config.classifier())
    }

    pub fn with_classifier(locale: Locale, classifier: CapitalizationClassifier) -> Self {
        let alphabet = Alphabet::for_locale(&locale);
        Self { locale, alphabet, classifier }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Sorts, classifies and buckets `terms`, attaching links from `links`.
    ///
    /// Never fails: empty terms are dropped silently, terms without a filing
    /// letter or without links are left out and reported as diagnostics.
    #[tracing::instrument(skip_all, fields(locale = %self.locale, term_count = terms.len()))]
    pub fn build<S: AsRef<str>>(&self, terms: &[S], links: &LinkMap) -> IndexBuild {
        let present: Vec<&str> = terms
            .iter()
            .map(|term| term.as_ref())
            .filter(|term| !normalize(term).is_empty())
            .collect();
        let sorted = Collator::new(&self.alphabet).sort(&present);

        let mut buckets: Vec<Bucket> = Vec::new();
        let mut diagnostics = Vec::new();

        for term in sorted {
            let display = self.classifier.display_form(term.normalized);
            let Some(letter) = file_under(&display, &self.alphabet) else {
                report(
                    &mut diagnostics,
                    Diagnostic::UnresolvableLetter {
                        term: term.original.to_string(),
                        locale: self.locale.to_string(),
                    },
                );
                continue;
            };
            let Some(targets) = links.get(term.original) else {
                report(&mut diagnostics, Diagnostic::MissingLink { term: term.original.to_string() });
                continue;
            };

            if buckets.last().map(|b| b.letter) != Some(letter) {
                tracing::debug!(%letter, "opening bucket");
                buckets.push(Bucket::new(letter));
            }
            if let Some(bucket) = buckets.last_mut() {
                bucket.entries.push(Entry {
                    term: display.into_owned(),
                    source: term.original.to_string(),
                    links: targets.to_vec(),
                });
            }
        }

        let index = Index::new(self.locale.clone(), buckets);
        tracing::info!(
            buckets = index.buckets().len(),
            entries = index.entry_count(),
            warnings = diagnostics.len(),
            "built vocabulary index"
        );
        IndexBuild { index, diagnostics }
    }
}

fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    tracing::warn!(term = diagnostic.term(), "{}", diagnostic);
    diagnostics.push(diagnostic);
}

/// Builds the index for `locale` with the default exception list.
pub fn build<S: AsRef<str>>(terms: &[S], links: &LinkMap, locale: &Locale) -> IndexBuild {
    IndexBuilder::new(locale.clone(), &IndexConfig::default()).build(terms, links)
}

/// Builds one index per locale, each on its own thread.
///
/// Builds share only the read-only inputs; results come back in `locales` order.
pub fn build_locales<S: AsRef<str> + Sync>(
    terms: &[S],
    links: &LinkMap,
    locales: &[Locale],
    config: &IndexConfig,
) -> Vec<IndexBuild> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = locales
            .iter()
            .map(|locale| scope.spawn(move || IndexBuilder::new(locale.clone(), config).build(terms, links)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}
