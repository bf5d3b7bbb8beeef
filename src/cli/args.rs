//! Command line argument parsing for Stemma CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Stemma - Porter stemming for English text
#[derive(Parser, Debug, Clone)]
#[command(name = "stemma")]
#[command(about = "Reduce English words to their Porter stems")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Stemma Contributors")]
#[command(long_about = None)]
pub struct StemmaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", env = "STEMMA_FORMAT")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StemmaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem words given on the command line
    Stem(StemArgs),

    /// Stem a word list file (one word per line)
    File(FileArgs),

    /// Check stems against an expected-output file
    Verify(VerifyArgs),

    /// Show the word after every step of the algorithm
    Trace(TraceArgs),

    /// Tokenize, lowercase and stem free text
    Analyze(AnalyzeArgs),
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem; arguments containing spaces are split into words
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,
}

/// Arguments for stemming a word list
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Word list path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Stem on a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Number of threads to use with --parallel
    #[arg(short, long, requires = "parallel")]
    pub threads: Option<usize>,

    /// Print each distinct stem once
    #[arg(short, long)]
    pub unique: bool,
}

/// Arguments for verification
#[derive(Parser, Debug, Clone)]
pub struct VerifyArgs {
    /// Vocabulary file (one word per line)
    #[arg(value_name = "VOCABULARY")]
    pub vocabulary: PathBuf,

    /// Expected stems, one per line, aligned with the vocabulary
    #[arg(value_name = "EXPECTED")]
    pub expected: PathBuf,

    /// Maximum number of mismatches to print
    #[arg(long, default_value = "20")]
    pub max_mismatches: usize,
}

/// Arguments for tracing a single word
#[derive(Parser, Debug, Clone)]
pub struct TraceArgs {
    /// Word to trace
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
