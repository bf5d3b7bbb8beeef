//! Text analysis module for Stemma.
//!
//! The Porter stemmer lives in [`token_filter::stem::porter`]; the other
//! modules are the tokenization and filtering pipeline that feeds it words
//! and consumes its stems.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, EnglishAnalyzer, PipelineAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{CachingStemmer, Filter, LowercaseFilter, PorterStemmer, StemFilter, Stemmer};
pub use tokenizer::{RegexTokenizer, Tokenizer, WhitespaceTokenizer};
