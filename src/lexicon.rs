//! Number-word tables loaded from TOML, with an embedded default and a
//! process-wide singleton.
//!
//! - `Lexicon::init_custom(toml_content)` sets a custom TOML before first `global()` call
//! - `Lexicon::global()` returns `&'static Lexicon` (lazy-init singleton)
//! - Default tables are embedded via `include_str!("default_lexicon.toml")`

use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::unicode::turkish_lowercase;

pub const DEFAULT_LEXICON_TOML: &str = include_str!("default_lexicon.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default lexicon TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_LEXICON_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] is empty")]
    EmptyTable(&'static str),
    #[error("literal {literal:?} in [{group}] is not an unsigned integer")]
    InvalidLiteral {
        group: &'static str,
        literal: String,
    },
    #[error("literal {literal} out of range for [{group}]: {reason}")]
    LiteralOutOfRange {
        group: &'static str,
        literal: String,
        reason: &'static str,
    },
    #[error("empty word for literal {literal:?} in [{group}]")]
    EmptyWord {
        group: &'static str,
        literal: String,
    },
    #[error("word {0:?} appears in more than one entry")]
    DuplicateWord(String),
    #[error("empty suffix entry")]
    EmptySuffix,
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

#[derive(Deserialize)]
struct LexiconConfig {
    suffixes: Vec<String>,
    ones: BTreeMap<String, String>,
    tens: BTreeMap<String, String>,
    scales: BTreeMap<String, String>,
}

/// One number word with its digit literal and numeric value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberEntry {
    pub literal: String,
    pub value: u64,
    pub word: String,
}

/// Read-only number-word tables: ones (1-9), tens (10-90) and scale markers
/// (100 and up), plus the suffixes stripped from token endings.
///
/// Words are stored Turkish-lowercased. Each group is sorted by descending
/// value so that digit substitution replaces longer literals before their
/// substrings ("1000" becomes "bin", never "yüz0"). The disjoint value
/// ranges of the three groups keep literals unique across the combined
/// table; word uniqueness is validated explicitly.
#[derive(Debug, Clone)]
pub struct Lexicon {
    ones: Vec<NumberEntry>,
    tens: Vec<NumberEntry>,
    scales: Vec<NumberEntry>,
    suffixes: Vec<String>,
}

impl Lexicon {
    /// Parse and validate lexicon TOML.
    pub fn from_toml(toml_str: &str) -> Result<Lexicon, LexiconError> {
        let config: LexiconConfig =
            toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

        let ones = parse_group("ones", &config.ones, |v| (1..=9).contains(&v), "must be 1-9")?;
        let tens = parse_group("tens", &config.tens, |v| (10..=99).contains(&v), "must be 10-99")?;
        let scales = parse_group("scales", &config.scales, |v| v >= 100, "must be at least 100")?;

        if config.suffixes.is_empty() {
            return Err(LexiconError::EmptyTable("suffixes"));
        }
        let mut suffixes = Vec::with_capacity(config.suffixes.len());
        for suffix in &config.suffixes {
            if suffix.is_empty() {
                return Err(LexiconError::EmptySuffix);
            }
            suffixes.push(turkish_lowercase(suffix));
        }

        let lexicon = Lexicon {
            ones,
            tens,
            scales,
            suffixes,
        };

        let mut seen = HashSet::new();
        for entry in lexicon.entries() {
            if !seen.insert(entry.word.as_str()) {
                return Err(LexiconError::DuplicateWord(entry.word.clone()));
            }
        }

        Ok(lexicon)
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LexiconError> {
        // Validate eagerly
        Lexicon::from_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LexiconError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Lexicon {
        static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_LEXICON_TOML);
            Lexicon::from_toml(toml_str).expect("lexicon TOML must be valid")
        })
    }

    /// All entries in substitution order: scale markers first, then tens,
    /// then ones, each by descending value.
    pub fn entries(&self) -> impl Iterator<Item = &NumberEntry> {
        self.scales
            .iter()
            .chain(self.tens.iter())
            .chain(self.ones.iter())
    }

    /// (literal, word) pairs in substitution order.
    pub fn substitutions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries().map(|e| (e.literal.as_str(), e.word.as_str()))
    }

    /// Numeric value of an exact lowercased word, if it denotes a number.
    pub fn value_of(&self, word: &str) -> Option<u64> {
        self.entries().find(|e| e.word == word).map(|e| e.value)
    }

    pub fn is_number_word(&self, word: &str) -> bool {
        self.value_of(word).is_some()
    }

    /// Suffixes checked against token endings, in priority order.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

fn parse_group(
    group: &'static str,
    raw: &BTreeMap<String, String>,
    in_range: fn(u64) -> bool,
    reason: &'static str,
) -> Result<Vec<NumberEntry>, LexiconError> {
    if raw.is_empty() {
        return Err(LexiconError::EmptyTable(group));
    }
    let mut entries = Vec::with_capacity(raw.len());
    for (literal, word) in raw {
        let value: u64 = literal.parse().map_err(|_| LexiconError::InvalidLiteral {
            group,
            literal: literal.clone(),
        })?;
        if !in_range(value) {
            return Err(LexiconError::LiteralOutOfRange {
                group,
                literal: literal.clone(),
                reason,
            });
        }
        if word.is_empty() {
            return Err(LexiconError::EmptyWord {
                group,
                literal: literal.clone(),
            });
        }
        entries.push(NumberEntry {
            literal: literal.clone(),
            value,
            word: turkish_lowercase(word),
        });
    }
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    Ok(entries)
}
