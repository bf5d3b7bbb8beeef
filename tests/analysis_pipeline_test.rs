//! Integration tests for tokenizer and filter pipelines feeding the stemmer.

use std::sync::Arc;

use stemma::analysis::analyzer::{Analyzer, EnglishAnalyzer, PipelineAnalyzer};
use stemma::analysis::token::{Token, TokenStream};
use stemma::analysis::token_filter::{Filter, LowercaseFilter, StemFilter};
use stemma::analysis::token_filter::stem::{CachingStemmer, PorterStemmer};
use stemma::analysis::tokenizer::{RegexTokenizer, WhitespaceTokenizer};
use stemma::error::Result;

/// Marks a fixed set of words as stopped.
struct StopWords(&'static [&'static str]);

impl Filter for StopWords {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words = self.0;
        Ok(Box::new(tokens.map(move |token| {
            if words.contains(&token.text.as_str()) {
                token.stop()
            } else {
                token
            }
        })))
    }

    fn name(&self) -> &'static str {
        "stop_words"
    }
}

#[test]
fn test_regex_pipeline_keeps_offsets() -> Result<()> {
    let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new()?))
        .add_filter(Arc::new(LowercaseFilter::new()))
        .add_filter(Arc::new(StemFilter::new()));

    let text = "Motoring, Hopping; 42 fizzed";
    let tokens: Vec<Token> = analyzer.analyze(text)?.collect();

    let stems: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(stems, ["motor", "hop", "42", "fizz"]);

    let spans: Vec<&str> = tokens
        .iter()
        .map(|t| &text[t.start_offset..t.end_offset])
        .collect();
    assert_eq!(spans, ["Motoring", "Hopping", "42", "fizzed"]);
    Ok(())
}

#[test]
fn test_stopped_tokens_are_not_stemmed() -> Result<()> {
    let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
        .add_filter(Arc::new(LowercaseFilter::new()))
        .add_filter(Arc::new(StopWords(&["the", "were"])))
        .add_filter(Arc::new(StemFilter::new()));

    let tokens: Vec<Token> = analyzer.analyze("The ponies were hopping")?.collect();

    assert_eq!(tokens.len(), 4);
    assert!(tokens[0].is_stopped());
    assert_eq!(tokens[0].text, "the");
    assert_eq!(tokens[0].original_text, None);
    assert_eq!(tokens[1].text, "poni");
    assert_eq!(tokens[1].original_text.as_deref(), Some("ponies"));
    assert!(tokens[2].is_stopped());
    assert_eq!(tokens[3].text, "hop");
    Ok(())
}

#[test]
fn test_english_analyzer_with_shared_cache() -> Result<()> {
    let analyzer = EnglishAnalyzer::with_stemmer(Box::new(CachingStemmer::new(PorterStemmer::new())))?;

    let text = "Running runners run. Tanned, tanning, TANS!";
    let tokens: Vec<String> = analyzer.analyze(text)?.map(|t| t.text).collect();

    assert_eq!(tokens, ["run", "runner", "run", "tan", "tan", "tan"]);
    Ok(())
}

#[test]
fn test_analyzers_are_shareable_across_threads() -> Result<()> {
    let analyzer = Arc::new(EnglishAnalyzer::new()?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            std::thread::spawn(move || {
                analyzer
                    .analyze("caresses ponies ties")
                    .map(|tokens| tokens.map(|t| t.text).collect::<Vec<_>>())
            })
        })
        .collect();

    for handle in handles {
        let tokens = handle.join().unwrap()?;
        assert_eq!(tokens, ["caress", "poni", "ti"]);
    }
    Ok(())
}
