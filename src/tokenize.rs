//! Text normalization: digit substitution, fused-word splitting,
//! tokenization.

use crate::lexicon::Lexicon;
use crate::unicode::turkish_lowercase;

/// Replace digit literals with their spelled words anywhere in `text`.
///
/// Longer literals substitute first ("1000" becomes "bin", not "yüz0").
/// This is substring replacement, not numeric parsing: "25" becomes
/// "ikibeş", which the fused-word splitter later separates into tokens.
pub fn substitute_digits(lexicon: &Lexicon, text: &str) -> String {
    let mut out = text.to_string();
    for (literal, word) in lexicon.substitutions() {
        if out.contains(literal) {
            out = out.replace(literal, word);
        }
    }
    out
}

/// Split a word written as fused number words ("yirmibeş") into its
/// space-separated parts ("yirmi beş").
///
/// Scans a growing window over the characters: the shortest match of at
/// least two characters wins and the scan restarts after it. Matching is
/// case-insensitive but the returned parts keep the original casing.
/// Characters that never head a match are skipped, so embedded number
/// words are still found ("takson" yields "on"). Returns `None` when no
/// part of the word matches.
pub fn split_fused_word(lexicon: &Lexicon, word: &str) -> Option<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut parts: Vec<String> = Vec::new();
    let mut start = 0;
    let mut len = 2;
    while start + len <= chars.len() {
        let window: String = chars[start..start + len].iter().collect();
        if lexicon.is_number_word(&turkish_lowercase(&window)) {
            parts.push(window);
            start += len;
            len = 2;
        } else {
            len += 1;
            if start + len > chars.len() {
                start += 1;
                len = 2;
            }
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Split `text` into tokens: substitute digits, then break each
/// whitespace-separated word on fused number words.
///
/// A fused match is spliced back into the token it came from, so
/// surrounding non-matching characters stay attached to the nearest part
/// ("xyirmibeş" becomes "xyirmi" and "beş"). When the matched parts are
/// not contiguous inside the token the token is left unchanged.
pub fn tokenize(lexicon: &Lexicon, text: &str) -> Vec<String> {
    let substituted = substitute_digits(lexicon, text);
    let mut tokens = Vec::new();
    for raw in substituted.split_ascii_whitespace() {
        match split_fused_word(lexicon, raw) {
            Some(spaced) => {
                let compact = spaced.replace(' ', "");
                let replaced = raw.replacen(&compact, &spaced, 1);
                tokens.extend(replaced.split_ascii_whitespace().map(str::to_string));
            }
            None => tokens.push(raw.to_string()),
        }
    }
    tokens
}
