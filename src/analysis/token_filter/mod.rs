//! Token filters rewrite or drop tokens between the tokenizer and the consumer.
//!
//! Filters are lazy: each one wraps the incoming stream in another iterator
//! and nothing runs until the stream is consumed.

pub mod lowercase;
pub mod stem;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A transformation applied to every token of a stream.
pub trait Filter: Send + Sync {
    /// Wrap `tokens` with this filter.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Rewrite the text of each token with `rewrite`.
///
/// `rewrite` returns `None` when the text is already in its final form, which
/// keeps the original allocation.
pub(crate) fn rewrite_text<F>(tokens: TokenStream, rewrite: F) -> TokenStream
where
    F: Fn(&str) -> Option<String> + 'static,
{
    Box::new(tokens.map(move |token| match rewrite(&token.text) {
        Some(text) => token.with_text(text),
        None => token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_rewrite_text_keeps_offsets() {
        let tokens = vec![
            Token::with_offsets("keep", 0, 0, 4),
            Token::with_offsets("swap", 1, 5, 9),
        ];

        let rewritten: Vec<Token> = rewrite_text(Box::new(tokens.into_iter()), |text| {
            (text == "swap").then(|| "swapped".to_string())
        })
        .collect();

        assert_eq!(rewritten[0].text, "keep");
        assert_eq!(rewritten[1].text, "swapped");
        assert_eq!((rewritten[1].start_offset, rewritten[1].end_offset), (5, 9));
    }
}
