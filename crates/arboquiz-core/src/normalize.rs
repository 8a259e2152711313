//! Answer normalization for tolerant comparison.
//!
//! Folds away spelling mechanics unrelated to taxonomic knowledge: case,
//! diacritics, punctuation, stray whitespace, and a naive plural `s`.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize free text for comparison.
///
/// Steps, in order: lowercase; canonical decomposition with combining marks
/// dropped (`é` → `e`, `ç` → `c`); ASCII punctuation removed; whitespace
/// runs collapsed to single spaces; trailing `s` characters stripped.
///
/// The trailing-`s` fold is deliberately naive (it conflates `-us` endings
/// with their bare stems) and is kept as the quiz has always behaved.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_marks: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let without_punct: String = without_marks
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    let collapsed = without_punct.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches('s').to_string()
}

/// Whether two free-text answers are equivalent once normalized.
pub fn equivalent(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn folds_case_and_accents() {
        assert_eq!(normalize("Chêne"), "chene");
        assert!(equivalent("Chêne", "chene"));
        assert!(equivalent("Érable", "erable"));
        assert_eq!(normalize("ça"), "ca");
    }

    #[test]
    fn folds_trailing_plural() {
        assert!(equivalent("Chênes", "chêne"));
        // rstrip semantics: every trailing `s` goes, not just one.
        assert_eq!(normalize("chêness"), "chene");
    }

    #[test]
    fn strips_punctuation_and_collapses_whitespace() {
        assert_eq!(normalize("alba 'Tristis'"), "alba tristi");
        assert_eq!(normalize("  Chêne   pédonculé  "), "chene pedoncule");
        assert_eq!(normalize("x hispanica"), "x hispanica");
        assert_eq!(normalize("Marronnier d'Inde"), "marronnier dinde");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "Chêne pédonculé",
            "Chênes",
            "alba 'Tristis'",
            "buss",
            "Quercus",
            "  Tilleul à grandes   feuilles ",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
