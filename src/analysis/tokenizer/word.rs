//! English word tokenizer with clitic splitting.
//!
//! Splits on whitespace like [`WhitespaceTokenizer`](super::WhitespaceTokenizer)
//! and then separates English clitics the way treebank-style word tokenizers
//! do, so that `"don't"` becomes `"do"` + `"n't"` and `"i'm"` becomes
//! `"i"` + `"'m"`. A handful of fused forms (`cannot`, `gonna`, ...) are split
//! into their two parts.
//!
//! # Examples
//!
//! ```
//! use emotion_classifier::analysis::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new();
//! let words: Vec<String> = tokenizer
//!     .tokenize("i can't believe it's today")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(words, vec!["i", "ca", "n't", "believe", "it", "'s", "today"]);
//! ```

use super::whitespace::WhitespaceTokenizer;
use super::{Tokenizer, tokens_from_spans};
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Clitics split off the end of a word, longest first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Fused forms and the byte index at which they are split.
const CONTRACTIONS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("wanna", 3),
    ("gimme", 3),
    ("lemme", 3),
    ("d'ye", 1),
    ("more'n", 4),
    ("'tis", 2),
    ("'twas", 2),
];

/// A whitespace tokenizer that also splits English clitics.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Split a single whitespace-free word into relative byte ranges.
    fn split_word(word: &str) -> Vec<(usize, usize)> {
        let lower = word.to_ascii_lowercase();
        let len = word.len();

        if let Some((_, at)) = CONTRACTIONS.iter().find(|(w, _)| *w == lower) {
            return vec![(0, *at), (*at, len)];
        }

        for clitic in CLITICS {
            if len > clitic.len() && lower.ends_with(clitic) {
                let at = len - clitic.len();
                if !lower[..at].ends_with('\'') {
                    return vec![(0, at), (at, len)];
                }
            }
        }

        // A trailing bare apostrophe, as in "parents'"
        if len > 1 && lower.ends_with('\'') && !lower[..len - 1].ends_with('\'') {
            return vec![(0, len - 1), (len - 1, len)];
        }

        vec![(0, len)]
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let spans = WhitespaceTokenizer::spans(text)
            .into_iter()
            .flat_map(|(start, end)| {
                Self::split_word(&text[start..end])
                    .into_iter()
                    .map(move |(from, to)| (start + from, start + to))
            });

        Ok(tokens_from_spans(text, spans))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
