/// Lower-cases a token and strips punctuation hugging either end, so
/// `"Dog,"` and `dog` share a key. Inner apostrophes and hyphens survive.
pub fn normalize(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Splits on whitespace and normalizes, dropping tokens that were pure
/// punctuation.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize)
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_edges_only() {
        assert_eq!(normalize("Dog,"), "dog");
        assert_eq!(normalize("\"Hello!\""), "hello");
        assert_eq!(normalize("don't"), "don't");
        assert_eq!(normalize("well-known."), "well-known");
        assert_eq!(normalize("--"), "");
    }

    #[test]
    fn tokenize_drops_bare_punctuation() {
        assert_eq!(
            tokenize("  The quick - brown\tfox... "),
            vec!["the", "quick", "brown", "fox"]
        );
    }
}
