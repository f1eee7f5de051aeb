//! Tokenizers split text into the tokens that start an analysis chain.
//!
//! - [`WhitespaceTokenizer`]: runs of non-whitespace
//! - [`WordTokenizer`]: whitespace runs with English clitics split off
//! - [`RegexTokenizer`]: regex matches, as replayed by TF-IDF vectorizers

pub mod regex;
pub mod whitespace;
pub mod word;

pub use regex::RegexTokenizer;
pub use whitespace::WhitespaceTokenizer;
pub use word::WordTokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Splits text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text`. Offsets in the returned tokens index into `text`.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Build tokens from ordered `(start, end)` byte spans of `text`.
pub(crate) fn tokens_from_spans<I>(text: &str, spans: I) -> TokenStream
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let tokens: Vec<Token> = spans
        .into_iter()
        .enumerate()
        .map(|(position, (start, end))| {
            Token::with_offsets(&text[start..end], position, start, end)
        })
        .collect();

    Box::new(tokens.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_from_spans() {
        let text = "so 2 happy";
        let tokens: Vec<Token> = tokens_from_spans(text, [(0, 2), (3, 4), (5, 10)]).collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "2");
        assert_eq!(tokens[2].position, 2);
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (5, 10));
    }
}
