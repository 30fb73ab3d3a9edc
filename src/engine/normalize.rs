use unicode_normalization::UnicodeNormalization;

/// Normalize free text for matching: strip diacritics, lowercase, and replace
/// punctuation with spaces.
///
/// The text is decomposed to NFD so accented characters split into a base
/// letter plus combining marks, the marks are dropped, and every remaining
/// character that is neither alphanumeric nor whitespace becomes a space.
/// Idempotent: a second pass finds nothing left to strip.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Normalize and split into non-empty tokens.
///
/// Repeated whitespace (including spaces introduced by punctuation removal)
/// never produces empty tokens. Order follows the input; scoring treats the
/// result as a set.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Combining marks (Unicode category Mn) left over after NFD decomposition.
/// The first range covers every diacritic used by the supported languages;
/// the others catch less common marks in pasted text.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_french_accents() {
        assert_eq!(normalize("Côlon irrité, ça brûle"), "colon irrite  ca brule");
    }

    #[test]
    fn strips_spanish_accents_and_punctuation() {
        assert_eq!(normalize("¿Cuánto dura?"), " cuanto dura ");
    }

    #[test]
    fn punctuation_becomes_spaces() {
        assert_eq!(
            tokenize("C'est quoi, une coloscopie ?"),
            vec!["c", "est", "quoi", "une", "coloscopie"]
        );
    }

    #[test]
    fn hyphenated_words_split() {
        assert_eq!(tokenize("rendez-vous"), vec!["rendez", "vous"]);
    }

    #[test]
    fn empty_and_whitespace_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n  ").is_empty());
        assert!(tokenize("?!...;").is_empty());
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(tokenize("ouvert à 7h00"), vec!["ouvert", "a", "7h00"]);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC{0,80}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn tokens_never_empty(s in "\\PC{0,80}") {
            prop_assert!(tokenize(&s).iter().all(|t| !t.is_empty()));
        }
    }
}
