
use crate::lexicon::{Lexicon, DEFAULT_LEXICON_TOML};

pub(super) fn test_lexicon() -> Lexicon {
    Lexicon::from_toml(DEFAULT_LEXICON_TOML).expect("default lexicon must parse")
}
