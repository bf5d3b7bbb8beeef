//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers. An English
//! indexing pipeline typically chains them like this:
//!
//! ```text
//! Tokenizer → Lowercase → Stemmer → Index
//! ```
//!
//! # Examples
//!
//! ```
//! use stemma::analysis::token_filter::Filter;
//! use stemma::analysis::token_filter::stem::StemFilter;
//! use stemma::analysis::token::Token;
//!
//! let filter = StemFilter::new();
//! let tokens = vec![Token::new("ponies", 0), Token::new("cats", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "poni");
//! assert_eq!(filtered[1].text, "cat");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lowercase;
pub mod stem;

// Re-export all filters for convenient access
pub use lowercase::LowercaseFilter;
pub use stem::{CachingStemmer, PorterStemmer, StemFilter, Stemmer};
