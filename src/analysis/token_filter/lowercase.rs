//! Lowercasing.
//!
//! ```
//! use emotion_classifier::analysis::token::Token;
//! use emotion_classifier::analysis::token_filter::{Filter, LowercaseFilter};
//!
//! let tokens = vec![Token::new("So", 0), Token::new("HAPPY", 1)];
//! let lowered: Vec<String> = LowercaseFilter::new()
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(lowered, ["so", "happy"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, rewrite_text};
use crate::error::Result;

/// Lowercases token text with full Unicode case mapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(rewrite_text(tokens, |text| {
            text.chars()
                .any(char::is_uppercase)
                .then(|| text.to_lowercase())
        }))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
