//! Analyzer implementations that combine tokenizers and filters.

pub mod analyzer;
pub mod english;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use english::EnglishAnalyzer;
pub use pipeline::PipelineAnalyzer;
