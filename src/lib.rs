//! # Stemma
//!
//! Porter stemming for English search indexing.
//!
//! ## Features
//!
//! - Pure Rust Porter stemmer, total over any input string
//! - Tokenizer and filter pipeline for index-time analysis
//! - Caching stemmer for repetitive vocabularies
//! - Parallel batch stemming
//! - Verification against canonical vocabulary lists
//!
//! ```
//! assert_eq!(stemma::stem("relational"), "relat");
//! assert_eq!(stemma::stem("ponies"), "poni");
//! ```

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod error;
pub mod vocabulary;

pub use analysis::token_filter::stem::porter::stem;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer, PipelineAnalyzer};
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::token_filter::stem::porter::{PorterStemmer, stem};
    pub use crate::analysis::token_filter::stem::{CachingStemmer, StemFilter, Stemmer};
    pub use crate::batch::{BatchConfig, BatchStemmer};
    pub use crate::error::{Result, StemmaError};
    pub use crate::vocabulary::{VerificationReport, Vocabulary};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
