//! Error types for the Stemma library.
//!
//! Stemming itself never fails: `stem` is total over any string. Errors come
//! from the surrounding machinery (reading word lists, building tokenizers,
//! thread pools and the CLI), and are all represented by [`StemmaError`].
//!
//! # Examples
//!
//! ```
//! use stemma::error::{StemmaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StemmaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Stemma operations.
#[derive(Error, Debug)]
pub enum StemmaError {
    /// I/O errors (reading word lists, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Malformed or mismatched word lists
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// Stems that did not match the expected output
    #[error("Verification failed: {0}")]
    Verification(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with StemmaError.
pub type Result<T> = std::result::Result<T, StemmaError>;

impl StemmaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        StemmaError::Analysis(msg.into())
    }

    /// Create a new vocabulary error.
    pub fn vocabulary<S: Into<String>>(msg: S) -> Self {
        StemmaError::Vocabulary(msg.into())
    }

    /// Create a new verification error.
    pub fn verification<S: Into<String>>(msg: S) -> Self {
        StemmaError::Verification(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StemmaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        StemmaError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        StemmaError::Other(format!("Internal error: {}", msg.into()))
    }
}
