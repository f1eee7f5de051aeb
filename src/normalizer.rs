//! Text normalization applied before feature extraction.
//!
//! Normalization removes every character outside ASCII letters, digits,
//! apostrophes and whitespace, then lowercases. With stemming enabled the
//! cleaned text is additionally split into words (English clitics become
//! their own tokens), each word is reduced to its Porter stem, and the stems
//! are joined with single spaces.
//!
//! # Examples
//!
//! ```
//! use emotion_classifier::normalizer::TextNormalizer;
//!
//! let plain = TextNormalizer::new(false).unwrap();
//! assert_eq!(plain.normalize("I am so happy today!!!").unwrap(), "i am so happy today");
//!
//! let stemming = TextNormalizer::new(true).unwrap();
//! assert_eq!(stemming.normalize("Feeling HAPPY, aren't we?").unwrap(), "feel happi are n't we");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::PatternReplaceCharFilter;
use crate::analysis::token_filter::{LowercaseFilter, StemFilter};
use crate::analysis::tokenizer::WordTokenizer;
use crate::error::Result;

/// Characters outside this class are removed from raw input.
pub const NOISE_PATTERN: &str = r"[^a-zA-Z0-9'\s]+";

/// Deterministic text cleaner, optionally stemming.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    stemming: bool,
    analyzer: PipelineAnalyzer,
}

impl TextNormalizer {
    /// Create a normalizer.
    pub fn new(stemming: bool) -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::remove(NOISE_PATTERN)?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("normalizer");

        Ok(TextNormalizer { stemming, analyzer })
    }

    /// Whether stemming is applied.
    pub fn stemming(&self) -> bool {
        self.stemming
    }

    /// Normalize raw text.
    ///
    /// Never fails on user input. The `Result` carries errors raised by the
    /// underlying analysis chain.
    pub fn normalize(&self, raw: &str) -> Result<String> {
        if !self.stemming {
            return Ok(self.analyzer.filter_text(raw).to_lowercase());
        }

        let stems: Vec<String> = self.analyzer.analyze(raw)?.map(|token| token.text).collect();
        Ok(stems.join(" "))
    }
}
