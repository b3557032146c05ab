//! Spelled-number conversion over free-form text.
//!
//! `convert` tokenizes the input, recognizes runs of consecutive number
//! words, collapses each run into one numeral, and passes everything else
//! through.

use tracing::{debug, debug_span};

use crate::lexicon::Lexicon;
use crate::numeric::{accumulate, recognize, Recognition};
use crate::tokenize::tokenize;

/// Convert spelled numbers in `text` to digits using the global lexicon.
///
/// Total over all inputs: unrecognized text passes through unchanged
/// (modulo whitespace collapsing) and the empty string maps to itself.
pub fn convert(text: &str) -> String {
    convert_with(Lexicon::global(), text)
}

/// Convert spelled numbers in `text` to digits using the given lexicon.
pub fn convert_with(lexicon: &Lexicon, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let char_count = text.chars().count();
    let _span = debug_span!("convert", char_count).entered();
    let tokens = tokenize(lexicon, text);
    debug!(token_count = tokens.len());
    let mut output: Vec<String> = Vec::with_capacity(tokens.len());
    let mut run: Vec<Recognition> = Vec::new();
    for token in tokens {
        match recognize(lexicon, &token) {
            Some(rec) => run.push(rec),
            None => {
                if !run.is_empty() {
                    output.push(render_run(&run, true));
                    run.clear();
                }
                output.push(token);
            }
        }
    }
    // A run still open at end of input flushes without its suffix.
    if !run.is_empty() {
        output.push(render_run(&run, false));
    }
    output.join(" ")
}

fn render_run(run: &[Recognition], with_suffix: bool) -> String {
    let values: Vec<u64> = run.iter().map(|r| r.value).collect();
    let value = accumulate(&values);
    let suffix = if with_suffix {
        run.last().map(|r| r.suffix.as_str()).unwrap_or("")
    } else {
        ""
    };
    format!("{value}{suffix}")
}
