//! Char filters rewrite raw text before it reaches the tokenizer.
//!
//! The normalizer uses [`PatternReplaceCharFilter`] to strip every character
//! outside the permitted alphabet.

pub mod pattern_replace;

pub use pattern_replace::PatternReplaceCharFilter;

/// Rewrites text ahead of tokenization.
pub trait CharFilter: Send + Sync {
    /// Filter `input`, returning the rewritten text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter for debugging and logging.
    fn name(&self) -> &'static str;
}
