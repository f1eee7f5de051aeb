//! Text analysis building blocks.
//!
//! Char filters, tokenizers and token filters compose into a
//! [`PipelineAnalyzer`]. The normalizer uses one to clean and stem input text,
//! and the TF-IDF vectorizer uses one to replay the tokenization its
//! vocabulary was fitted with.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use char_filter::{CharFilter, PatternReplaceCharFilter};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter, PorterStemmer, StemFilter, Stemmer, StopFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer, WhitespaceTokenizer, WordTokenizer};
