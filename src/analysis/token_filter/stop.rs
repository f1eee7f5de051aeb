//! Stop word removal.
//!
//! Vectorizer artifacts fitted with a stop word list carry that list. The
//! vectorizer replays it through this filter so transform-time tokens match
//! fit-time tokens. Matching is exact; lowercasing, when wanted, runs first.
//!
//! ```
//! use emotion_classifier::analysis::token::Token;
//! use emotion_classifier::analysis::token_filter::{Filter, StopFilter};
//!
//! let filter = StopFilter::from_words(["i", "am", "so"]);
//! let tokens = vec![Token::new("i", 0), Token::new("am", 1), Token::new("glad", 2)];
//! let kept: Vec<String> = filter
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(kept, ["glad"]);
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Drops tokens found in a fixed word set.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Whether `word` is dropped by this filter.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words = Arc::clone(&self.words);
        Ok(Box::new(tokens.filter(move |token| !words.contains(&token.text))))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_positions_survive_removal() {
        let filter = StopFilter::from_words(["the", "and"]);
        let tokens = vec![
            Token::new("love", 0),
            Token::new("the", 1),
            Token::new("rain", 2),
            Token::new("and", 3),
            Token::new("sun", 4),
        ];

        let kept: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        let texts: Vec<&str> = kept.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["love", "rain", "sun"]);
        assert_eq!(kept[1].position, 2);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let filter = StopFilter::from_words(["the"]);
        assert!(filter.contains("the"));
        assert!(!filter.contains("The"));
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = StopFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.len(), 0);

        let tokens = vec![Token::new("anything", 0)];
        assert_eq!(filter.filter(Box::new(tokens.into_iter())).unwrap().count(), 1);
    }
}
