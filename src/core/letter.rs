// File: src/core/letter.rs
use crate::core::alphabet::Alphabet;
use crate::core::transliterate::base_letter;
use crate::core::types::Letter;

/// Resolves the alphabet letter a single character files under.
///
/// Exact (lower-cased) membership wins; otherwise the diacritic-folded base
/// letter is tried. Never yields a letter outside `alphabet`.
pub fn resolve_char(c: char, alphabet: &Alphabet) -> Option<Letter> {
    let lower = c.to_lowercase().next().unwrap_or(c);
    if alphabet.contains(lower) {
        return Some(lower);
    }
    base_letter(lower).filter(|&base| alphabet.contains(base))
}

/// The letter `term` is filed under, or `None` if its leading character
/// cannot be placed in `alphabet` (digits, punctuation, other scripts).
pub fn file_under(term: &str, alphabet: &Alphabet) -> Option<Letter> {
    term.chars().next().and_then(|c| resolve_char(c, alphabet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::Locale;

    fn en() -> Alphabet {
        Alphabet::for_locale(&Locale::parse("en"))
    }

    fn es() -> Alphabet {
        Alphabet::for_locale(&Locale::parse("es"))
    }

    #[test]
    fn plain_letters_file_under_themselves() {
        assert_eq!(file_under("zebra", &en()), Some('z'));
        assert_eq!(file_under("API (Application Programming Interface)", &en()), Some('a'));
    }

    #[test]
    fn accented_letters_fold_to_base() {
        assert_eq!(file_under("Índice", &en()), Some('i'));
        assert_eq!(file_under("éxito", &es()), Some('e'));
        assert_eq!(file_under("ñandú", &en()), Some('n'));
    }

    #[test]
    fn enye_is_its_own_letter_in_spanish() {
        assert_eq!(file_under("ñandú", &es()), Some('ñ'));
        assert_eq!(file_under("Ñu", &es()), Some('ñ'));
    }

    #[test]
    fn unresolvable_terms_have_no_letter() {
        assert_eq!(file_under("3D printing", &en()), None);
        assert_eq!(file_under("(parenthetical)", &en()), None);
        assert_eq!(file_under("Ωmega", &en()), None);
        assert_eq!(file_under("", &en()), None);
    }
}
