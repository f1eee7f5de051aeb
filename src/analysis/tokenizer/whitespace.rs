//! Whitespace tokenizer implementation.

use super::{Tokenizer, tokens_from_spans};
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Split text into `(start, end)` byte ranges of non-whitespace runs.
    pub(crate) fn spans(text: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut start = None;

        for (i, c) in text.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(s)) => {
                    spans.push((s, i));
                    start = None;
                }
                (false, None) => start = Some(i),
                _ => {}
            }
        }

        if let Some(s) = start {
            spans.push((s, text.len()));
        }

        spans
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(tokens_from_spans(text, Self::spans(text)))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
