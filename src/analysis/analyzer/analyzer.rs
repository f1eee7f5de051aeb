//! Core analyzer trait definition.
//!
//! An [`Analyzer`] turns raw text into a stream of tokens. The normalizer and
//! the TF-IDF vectorizer both build one from the same parts:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use emotion_classifier::analysis::analyzer::Analyzer;
//! use emotion_classifier::analysis::token::{Token, TokenStream};
//! use emotion_classifier::error::Result;
//!
//! struct WholeTextAnalyzer;
//!
//! impl Analyzer for WholeTextAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::once(Token::new(text, 0))))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "whole_text"
//!     }
//! }
//!
//! let tokens: Vec<_> = WholeTextAnalyzer.analyze("so happy").unwrap().collect();
//! assert_eq!(tokens[0].text, "so happy");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so that a loaded pipeline can classify
/// requests from several threads at once.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
