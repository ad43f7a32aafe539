//! Text normalization: punctuation stripping, lowercasing, whitespace tokenization.

/// Removes every ASCII punctuation character (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Splits `text` into lowercase words after stripping punctuation.
///
/// Contractions and hyphenated words collapse into one token
/// ("don't" becomes "dont").
pub fn tokenize(text: &str) -> Vec<String> {
    strip_punctuation(text)
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
