fn main() {
    // Validate the embedded lexicon TOML at compile time.
    let content = include_str!("src/default_lexicon.toml");
    if content.parse::<toml::Value>().is_err() {
        panic!("src/default_lexicon.toml contains invalid TOML");
    }
}
