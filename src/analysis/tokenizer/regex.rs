//! Regex tokenizer: every non-overlapping match of a pattern is a token.

use std::sync::Arc;

use regex::Regex;

use super::{Tokenizer, tokens_from_spans};
use crate::analysis::token::TokenStream;
use crate::error::{EmotionError, Result};

/// Token pattern used by TF-IDF vectorizers: words of two or more characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Extracts regex matches as tokens.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer with [`DEFAULT_TOKEN_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_TOKEN_PATTERN)
    }

    /// Create a tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| EmotionError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// The pattern source.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let spans = self.pattern.find_iter(text).map(|m| (m.start(), m.end()));
        Ok(tokens_from_spans(text, spans))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_default_pattern_skips_single_characters() {
        let tokenizer = RegexTokenizer::default();
        let tokens: Vec<Token> = tokenizer.tokenize("i am so happy").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "am");
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (2, 4));
        assert_eq!(tokens[2].text, "happy");
        assert_eq!(tokens[2].position, 2);
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (8, 13));
    }

    #[test]
    fn test_apostrophes_split_words() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<String> = tokenizer
            .tokenize("don't stop")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, ["don", "stop"]);
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = RegexTokenizer::with_pattern(r"[a-z']+").unwrap();
        let tokens: Vec<String> = tokenizer
            .tokenize("don't stop")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, ["don't", "stop"]);
        assert_eq!(tokenizer.pattern(), "[a-z']+");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("(unclosed").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
