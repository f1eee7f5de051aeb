//! Stemming.
//!
//! A [`Stemmer`] reduces a single word to its stem; [`StemFilter`] applies
//! one to every token of a stream. [`PorterStemmer`] is the only stemmer
//! shipped, matching what stemmed vectorizer artifacts were fitted with.

pub mod porter;

pub use porter::PorterStemmer;

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, rewrite_text};
use crate::error::Result;

/// Reduces words to their stems.
pub trait Stemmer: Send + Sync {
    /// Stem one word.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Replaces each token with its stem.
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// A filter using the Porter stemmer.
    pub fn new() -> Self {
        Self::with_stemmer(PorterStemmer::new())
    }

    /// A filter using `stemmer`.
    pub fn with_stemmer<S: Stemmer + 'static>(stemmer: S) -> Self {
        StemFilter {
            stemmer: Arc::new(stemmer),
        }
    }

    /// The stemmer applied to tokens.
    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        Ok(rewrite_text(tokens, move |text| {
            let stem = stemmer.stem(text);
            (stem != text).then_some(stem)
        }))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    struct Truncate;

    impl Stemmer for Truncate {
        fn stem(&self, word: &str) -> String {
            word.chars().take(3).collect()
        }

        fn name(&self) -> &'static str {
            "truncate"
        }
    }

    fn stems(filter: &StemFilter, words: &[&str]) -> Vec<String> {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_porter_filter() {
        let filter = StemFilter::new();
        assert_eq!(
            stems(&filter, &["crying", "happiness", "loved", "surprised"]),
            ["cri", "happi", "love", "surpris"]
        );
        assert_eq!(filter.stemmer().name(), "porter");
    }

    #[test]
    fn test_custom_stemmer() {
        let filter = StemFilter::with_stemmer(Truncate);

        assert_eq!(stems(&filter, &["furious", "ok"]), ["fur", "ok"]);
        assert_eq!(format!("{filter:?}"), "StemFilter { stemmer: \"truncate\" }");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
    }
}
