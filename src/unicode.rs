//! Turkish-aware case mapping.
//!
//! Turkish pairs dotted İ/i and dotless I/ı. The standard Unicode mappings
//! pair 'I' with 'i' and lowercase 'İ' to "i" plus a combining dot (U+0307),
//! which corrupts exact word lookups. These helpers apply the Turkish
//! pairings and defer to the standard mappings for every other character.

/// Lowercase with Turkish casing rules: `I` maps to `ı` and `İ` to `i`.
pub fn turkish_lowercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Uppercase with Turkish casing rules: `i` maps to `İ` and `ı` to `I`.
pub fn turkish_uppercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'i' => out.push('İ'),
            'ı' => out.push('I'),
            _ => out.extend(c.to_uppercase()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_dotted_and_dotless() {
        assert_eq!(turkish_lowercase("YİRMİ"), "yirmi");
        assert_eq!(turkish_lowercase("KIRK"), "kırk");
        assert_eq!(turkish_lowercase("ALTMIŞ"), "altmış");
        assert_eq!(turkish_lowercase("Iİıi"), "ıiıi");
    }

    #[test]
    fn test_lowercase_plain() {
        assert_eq!(turkish_lowercase("Dört"), "dört");
        assert_eq!(turkish_lowercase("abc"), "abc");
        assert_eq!(turkish_lowercase(""), "");
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(turkish_uppercase("yirmi"), "YİRMİ");
        assert_eq!(turkish_uppercase("kırk"), "KIRK");
        assert_eq!(turkish_uppercase("istanbul"), "İSTANBUL");
        assert_eq!(turkish_uppercase("ılgaz"), "ILGAZ");
    }

    #[test]
    fn test_case_round_trip() {
        for word in ["beş", "altı", "yirmi", "kırk", "altmış", "yüz", "milyon"] {
            assert_eq!(turkish_lowercase(&turkish_uppercase(word)), word);
        }
    }
}
