//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: a
//! tokenizer produces them, token filters rewrite or drop them, and the
//! normalizer or vectorizer finally consumes their text.
//!
//! # Examples
//!
//! ```
//! use emotion_classifier::analysis::token::Token;
//!
//! let token = Token::with_offsets("happy", 1, 6, 11);
//! assert_eq!(token.text, "happy");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the analyzed text
    pub start_offset: usize,

    /// The byte offset where this token ends in the analyzed text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the token text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Tokens flowing from a tokenizer through the filters, consumed lazily.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
    }

    #[test]
    fn test_token_with_text_keeps_offsets() {
        let token = Token::with_offsets("Running", 2, 10, 17).with_text("run");
        assert_eq!(token.text, "run");
        assert_eq!(token.position, 2);
        assert_eq!(token.start_offset, 10);
        assert_eq!(token.end_offset, 17);
    }

    #[test]
    fn test_token_display_and_len() {
        let token = Token::new("joy", 0);
        assert_eq!(format!("{token}"), "joy");
        assert_eq!(token.len(), 3);
        assert!(!token.is_empty());
    }
}
