//! Command implementations for Stemma CLI.

use std::io::{self, Write};

use log::{debug, info};

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::analysis::token::Token;
use crate::analysis::token_filter::stem::{PorterStemmer, Stemmer};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::batch::{BatchConfig, BatchStemmer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, StemmaError};
use crate::vocabulary::Vocabulary;

/// Execute a CLI command, writing results to stdout.
pub fn execute_command(args: StemmaArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(&args, &mut out)
}

/// Execute a CLI command, writing results to `out`.
pub fn execute_command_to(args: &StemmaArgs, out: &mut dyn Write) -> Result<()> {
    match &args.command {
        Command::Stem(stem_args) => stem_words(stem_args, args, out),
        Command::File(file_args) => stem_file(file_args, args, out),
        Command::Verify(verify_args) => verify_vocabulary(verify_args, args, out),
        Command::Trace(trace_args) => trace_word(trace_args, args, out),
        Command::Analyze(analyze_args) => analyze_text(analyze_args, args, out),
    }
}

/// Stem words given on the command line.
fn stem_words(args: &StemArgs, cli_args: &StemmaArgs, out: &mut dyn Write) -> Result<()> {
    let tokenizer = WhitespaceTokenizer::new();
    let stemmer = PorterStemmer::new();

    let mut results = Vec::with_capacity(args.words.len());
    for arg in &args.words {
        for token in tokenizer.tokenize(arg)? {
            results.push(StemPair {
                stem: stemmer.stem(&token.text),
                word: token.text,
            });
        }
    }

    output_result(&results, cli_args, out)
}

/// Stem every word of a word list file.
fn stem_file(args: &FileArgs, cli_args: &StemmaArgs, out: &mut dyn Write) -> Result<()> {
    let vocabulary = Vocabulary::from_path(&args.path)?;
    let words: Vec<&str> = vocabulary.words().collect();

    let config = if args.parallel {
        BatchConfig {
            thread_pool_size: args.threads,
            dedupe: args.unique,
            ..BatchConfig::default()
        }
    } else {
        BatchConfig {
            thread_pool_size: Some(1),
            dedupe: args.unique,
            ..BatchConfig::default()
        }
    };
    let batch = BatchStemmer::new(config)?;
    debug!("stemming {} with {:?}", args.path.display(), batch);

    let result = batch.process(&words);
    info!(
        "stemmed {} words from {} in {}ms",
        result.words_processed,
        args.path.display(),
        result.processing_time.as_millis()
    );

    if args.unique {
        let unique = UniqueStems {
            words_processed: result.words_processed,
            stems: result.stems,
        };
        output_result(&unique, cli_args, out)
    } else {
        let pairs: Vec<StemPair> = words
            .iter()
            .zip(result.stems)
            .map(|(word, stem)| StemPair {
                word: word.to_string(),
                stem,
            })
            .collect();
        output_result(&pairs, cli_args, out)
    }
}

/// Check stems of a vocabulary against an expected-output file.
fn verify_vocabulary(args: &VerifyArgs, cli_args: &StemmaArgs, out: &mut dyn Write) -> Result<()> {
    let vocabulary = Vocabulary::from_path(&args.vocabulary)?;
    let expected = Vocabulary::from_path(&args.expected)?;

    let report = vocabulary.verify_against(&expected, &PorterStemmer::new())?;
    let failed = report.mismatches.len();
    let total = report.total;

    output_result(
        &VerificationOutput {
            report,
            max_shown: args.max_mismatches,
        },
        cli_args,
        out,
    )?;

    if failed > 0 {
        return Err(StemmaError::verification(format!(
            "{failed} of {total} stems differ from {}",
            args.expected.display()
        )));
    }
    Ok(())
}

/// Show the word after every sub-step.
fn trace_word(args: &TraceArgs, cli_args: &StemmaArgs, out: &mut dyn Write) -> Result<()> {
    let trace = PorterStemmer::new().trace(&args.word);
    output_result(&trace, cli_args, out)
}

/// Run the English analyzer over free text.
fn analyze_text(args: &AnalyzeArgs, cli_args: &StemmaArgs, out: &mut dyn Write) -> Result<()> {
    let analyzer = EnglishAnalyzer::new()?;
    let tokens: Vec<Token> = analyzer.analyze(&args.text)?.collect();
    debug!("{} produced {} tokens", analyzer.name(), tokens.len());

    output_result(&tokens, cli_args, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn run(argv: &[&str]) -> (Result<()>, String) {
        let args = StemmaArgs::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        let result = execute_command_to(&args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_stem_splits_arguments() {
        let (result, text) = run(&["stemma", "stem", "running dogs", "ties"]);
        assert!(result.is_ok());
        assert_eq!(text, "running -> run\ndogs -> dog\nties -> ti\n");
    }

    #[test]
    fn test_file_unique() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");
        fs::write(&path, "cats\nrunning\ncat\nruns\n").unwrap();

        let (result, text) = run(&[
            "stemma",
            "-f",
            "csv",
            "file",
            path.to_str().unwrap(),
            "--unique",
        ]);
        assert!(result.is_ok());
        assert_eq!(text, "stem\ncat\nrun\n");
    }

    #[test]
    fn test_file_parallel_matches_word_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");
        fs::write(&path, "ponies\nhopping\nhappy\n").unwrap();

        let (result, text) = run(&[
            "stemma",
            "file",
            path.to_str().unwrap(),
            "--parallel",
            "--threads",
            "2",
        ]);
        assert!(result.is_ok());
        assert_eq!(text, "ponies -> poni\nhopping -> hop\nhappy -> happi\n");
    }

    #[test]
    fn test_verify_failure_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let vocabulary = temp_dir.path().join("voc.txt");
        let expected = temp_dir.path().join("output.txt");
        fs::write(&vocabulary, "caresses\nfeed\n").unwrap();
        fs::write(&expected, "caress\nfe\n").unwrap();

        let (result, text) = run(&[
            "stemma",
            "verify",
            vocabulary.to_str().unwrap(),
            expected.to_str().unwrap(),
        ]);
        assert!(matches!(result, Err(StemmaError::Verification(_))));
        assert!(text.contains("line 2: feed -> feed (expected fe)"));
        assert!(text.ends_with("porter: 1/2 stems match\n"));
    }

    #[test]
    fn test_verify_success() {
        let temp_dir = TempDir::new().unwrap();
        let vocabulary = temp_dir.path().join("voc.txt");
        let expected = temp_dir.path().join("output.txt");
        fs::write(&vocabulary, "caresses\nponies\n").unwrap();
        fs::write(&expected, "caress\nponi\n").unwrap();

        let (result, text) = run(&[
            "stemma",
            "verify",
            vocabulary.to_str().unwrap(),
            expected.to_str().unwrap(),
        ]);
        assert!(result.is_ok());
        assert_eq!(text, "porter: 2/2 stems match\n");
    }

    #[test]
    fn test_trace_json() {
        let (result, text) = run(&["stemma", "-f", "json", "trace", "hopping"]);
        assert!(result.is_ok());

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["stem"], "hop");
        assert_eq!(value["steps"][1]["step"], "step1b");
        assert_eq!(value["steps"][1]["word"], "hop");
    }

    #[test]
    fn test_analyze_csv() {
        let (result, text) = run(&["stemma", "-f", "csv", "analyze", "Ponies ran"]);
        assert!(result.is_ok());
        assert_eq!(
            text,
            "position,text,start_offset,end_offset,original_text\n0,poni,0,6,ponies\n1,ran,7,10,ran\n"
        );
    }

    #[test]
    fn test_missing_file_is_error() {
        let (result, _) = run(&["stemma", "file", "/no/such/words.txt"]);
        assert!(matches!(result, Err(StemmaError::Vocabulary(_))));
    }
}
