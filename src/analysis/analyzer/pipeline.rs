//! Pipeline analyzer that combines char filters, a tokenizer and filters.
//!
//! Processing order:
//! 1. Char filters rewrite the raw text
//! 2. The tokenizer splits the filtered text into tokens
//! 3. Token filters run in the order they were added
//!
//! Token offsets refer to the text the tokenizer saw, after char filtering.
//!
//! # Examples
//!
//! ```
//! use emotion_classifier::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use emotion_classifier::analysis::tokenizer::regex::RegexTokenizer;
//! use emotion_classifier::analysis::token_filter::lowercase::LowercaseFilter;
//! use emotion_classifier::analysis::token_filter::stop::StopFilter;
//! use std::sync::Arc;
//!
//! let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])))
//!     .with_name("tfidf");
//!
//! let tokens: Vec<_> = analyzer.analyze("Happy THE day AND night").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "happy");
//! assert_eq!(tokens[1].text, "day");
//! assert_eq!(tokens[2].text, "night");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with chains of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The name given with [`with_name`](Self::with_name).
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Apply only the char filters, returning the rewritten text.
    pub fn filter_text(&self, text: &str) -> String {
        self.char_filters
            .iter()
            .fold(text.to_string(), |acc, char_filter| char_filter.filter(&acc))
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let filtered = self.filter_text(text);

        let mut tokens = self.tokenizer.tokenize(&filtered)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::PatternReplaceCharFilter;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::{LowercaseFilter, StemFilter, StopFilter};
    use crate::analysis::tokenizer::{RegexTokenizer, WhitespaceTokenizer, WordTokenizer};

    fn noise_filter() -> Arc<PatternReplaceCharFilter> {
        Arc::new(PatternReplaceCharFilter::remove(r"[^a-zA-Z0-9'\s]+").unwrap())
    }

    fn texts(analyzer: &PipelineAnalyzer, input: &str) -> Vec<String> {
        analyzer.analyze(input).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_filters_run_in_order() {
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::default()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(["so", "am"])));

        assert_eq!(texts(&analyzer, "I am SO Happy"), ["happy"]);

        // Stop words match exactly, so they see the text as it is at their stage.
        let reversed = PipelineAnalyzer::new(Arc::new(RegexTokenizer::default()))
            .add_filter(Arc::new(StopFilter::from_words(["so", "am"])))
            .add_filter(Arc::new(LowercaseFilter::new()));

        assert_eq!(texts(&reversed, "I am SO Happy"), ["so", "happy"]);
    }

    #[test]
    fn test_stemming_pipeline() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
            .add_char_filter(noise_filter())
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StemFilter::new()));

        assert_eq!(
            texts(&analyzer, "Running, crying & LOVING it!"),
            ["run", "cri", "love", "it"]
        );
    }

    #[test]
    fn test_tokens_come_from_filtered_text() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(noise_filter())
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"-", "").unwrap()));

        let raw = "wow!!! :) heart-broken";
        let filtered = analyzer.filter_text(raw);
        assert_eq!(filtered, "wow  heartbroken");

        let tokens: Vec<Token> = analyzer.analyze(raw).unwrap().collect();
        assert_eq!(tokens.len(), 2);
        for token in &tokens {
            assert_eq!(&filtered[token.start_offset..token.end_offset], token.text);
        }
        assert_eq!(tokens[1].text, "heartbroken");
    }

    #[test]
    fn test_filter_text_skips_tokenization() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
            .add_char_filter(noise_filter())
            .add_filter(Arc::new(StemFilter::new()));

        assert_eq!(analyzer.filter_text("Yay!! Loving it"), "Yay Loving it");
    }

    #[test]
    fn test_name_and_debug() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        assert_eq!(analyzer.pipeline_name(), "pipeline_whitespace");

        let analyzer = analyzer
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("normalizer");
        let debug = format!("{analyzer:?}");

        assert!(debug.contains("normalizer"));
        assert!(debug.contains("lowercase"));
        assert_eq!(analyzer.pipeline_name(), "normalizer");
        assert_eq!(analyzer.name(), "pipeline");
    }
}
