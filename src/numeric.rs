//! Number-word recognition and numeral accumulation.

use crate::lexicon::Lexicon;
use crate::unicode::turkish_lowercase;

/// A recognized number token: its value and the locative suffix that was
/// stripped from it, in the token's original casing ("" when bare).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    pub value: u64,
    pub suffix: String,
}

/// Recognize `token` as a number word, with an optional trailing suffix.
///
/// The token is Turkish-lowercased, the first matching suffix is stripped,
/// and only the stripped form is looked up. A bare suffix ("de") strips to
/// the empty string and stays unrecognized.
pub fn recognize(lexicon: &Lexicon, token: &str) -> Option<Recognition> {
    let lowered = turkish_lowercase(token);
    let (stem, suffix) = split_suffix(lexicon, token, &lowered);
    let value = lexicon.value_of(stem)?;
    Some(Recognition { value, suffix })
}

fn split_suffix<'a>(lexicon: &Lexicon, original: &str, lowered: &'a str) -> (&'a str, String) {
    for suffix in lexicon.suffixes() {
        if let Some(stem) = lowered.strip_suffix(suffix.as_str()) {
            let keep = original
                .chars()
                .count()
                .saturating_sub(suffix.chars().count());
            let tail: String = original.chars().skip(keep).collect();
            return (stem, tail);
        }
    }
    (lowered, String::new())
}

/// Combine a run of number values into one numeral.
///
/// Walks the run keeping a current group value: an incoming value smaller
/// than the group adds to it (yirmi beş -> 25), one at least as large
/// multiplies it (iki yüz -> 200). An incoming value of 1000 or more
/// closes the group into the running total, so thousand and million
/// groups combine additively (bir milyon iki yüz bin -> 1200000).
/// Arithmetic saturates rather than overflowing.
pub fn accumulate(values: &[u64]) -> u64 {
    debug_assert!(!values.is_empty());
    let mut total: u64 = 0;
    let mut current: Option<u64> = None;
    for &v in values {
        current = Some(match current {
            None => v,
            Some(c) if c > v => c.saturating_add(v),
            Some(c) => c.saturating_mul(v),
        });
        if v >= 1000 {
            total = total.saturating_add(current.take().unwrap_or(0));
        }
    }
    total.saturating_add(current.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::DEFAULT_LEXICON_TOML;

    fn lexicon() -> Lexicon {
        Lexicon::from_toml(DEFAULT_LEXICON_TOML).unwrap()
    }

    fn rec(lex: &Lexicon, token: &str) -> Option<(u64, String)> {
        recognize(lex, token).map(|r| (r.value, r.suffix))
    }

    #[test]
    fn test_recognize_plain_words() {
        let lex = lexicon();
        assert_eq!(rec(&lex, "bir"), Some((1, String::new())));
        assert_eq!(rec(&lex, "yirmi"), Some((20, String::new())));
        assert_eq!(rec(&lex, "milyon"), Some((1_000_000, String::new())));
        assert_eq!(rec(&lex, "kedi"), None);
        assert_eq!(rec(&lex, ""), None);
    }

    #[test]
    fn test_recognize_turkish_casing() {
        let lex = lexicon();
        assert_eq!(rec(&lex, "YİRMİ"), Some((20, String::new())));
        assert_eq!(rec(&lex, "KIRK"), Some((40, String::new())));
        assert_eq!(rec(&lex, "Altmış"), Some((60, String::new())));
    }

    #[test]
    fn test_recognize_suffixes() {
        let lex = lexicon();
        assert_eq!(rec(&lex, "beşte"), Some((5, "te".to_string())));
        assert_eq!(rec(&lex, "onda"), Some((10, "da".to_string())));
        assert_eq!(rec(&lex, "birde"), Some((1, "de".to_string())));
        assert_eq!(rec(&lex, "altmışta"), Some((60, "ta".to_string())));
    }

    #[test]
    fn test_recognize_suffix_keeps_original_casing() {
        let lex = lexicon();
        assert_eq!(rec(&lex, "BEŞTE"), Some((5, "TE".to_string())));
        assert_eq!(rec(&lex, "OnDa"), Some((10, "Da".to_string())));
    }

    #[test]
    fn test_recognize_stripped_form_only() {
        let lex = lexicon();
        // "elde" strips to "el", which is not a number word.
        assert_eq!(rec(&lex, "elde"), None);
        // A bare suffix strips to the empty string.
        assert_eq!(rec(&lex, "de"), None);
        // Unknown inflections stay unrecognized.
        assert_eq!(rec(&lex, "beşler"), None);
    }

    #[test]
    fn test_accumulate_additive_and_multiplicative() {
        assert_eq!(accumulate(&[5]), 5);
        assert_eq!(accumulate(&[20, 5]), 25);
        assert_eq!(accumulate(&[2, 100]), 200);
        assert_eq!(accumulate(&[100, 10]), 110);
        assert_eq!(accumulate(&[9, 100, 90, 9]), 999);
    }

    #[test]
    fn test_accumulate_scale_groups() {
        assert_eq!(accumulate(&[1000]), 1000);
        assert_eq!(accumulate(&[10, 1000]), 10_000);
        assert_eq!(accumulate(&[2, 1000, 3, 100, 40, 5]), 2345);
        assert_eq!(accumulate(&[1, 1_000_000, 2, 100, 1000]), 1_200_000);
        assert_eq!(accumulate(&[1_000_000]), 1_000_000);
    }

    #[test]
    fn test_accumulate_saturates() {
        assert_eq!(accumulate(&[u64::MAX, 2]), u64::MAX);
        assert_eq!(accumulate(&[2, u64::MAX]), u64::MAX);
    }
}
