pub mod convert;
pub mod lexicon;
pub(crate) mod numeric;
pub mod tokenize;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use convert::{convert, convert_with};
pub use lexicon::{Lexicon, LexiconError};
