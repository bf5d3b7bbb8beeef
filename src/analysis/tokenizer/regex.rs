//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, StemmaError};

/// Pattern used by [`RegexTokenizer::new`].
pub const DEFAULT_PATTERN: &str = r"\w+";

/// Pattern used by [`RegexTokenizer::english_words`]: runs of ASCII letters,
/// optionally joined by an apostrophe ("don't", "o'clock").
pub const ENGLISH_WORD_PATTERN: &str = r"[A-Za-z]+(?:'[A-Za-z]+)*";

/// A tokenizer that emits every match of a regular expression as a token.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default `\w+` pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a tokenizer that only extracts English words.
    pub fn english_words() -> Result<Self> {
        Self::with_pattern(ENGLISH_WORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| StemmaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| Token::with_offsets(mat.as_str(), position, mat.start(), mat.end()))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_english_words() {
        let tokenizer = RegexTokenizer::english_words().unwrap();
        let tokens: Vec<String> = tokenizer
            .tokenize("It's 5 o'clock, runners!")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, ["It's", "o'clock", "runners"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexTokenizer::with_pattern("(").unwrap_err();
        assert!(matches!(err, StemmaError::Analysis(_)));
    }

    #[test]
    fn test_tokenizer_name() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(tokenizer.name(), "regex");
        assert_eq!(tokenizer.pattern(), DEFAULT_PATTERN);
    }
}
