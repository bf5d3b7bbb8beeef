//! Porter stemming algorithm implementation.
//!
//! This module provides an implementation of the Porter stemming algorithm,
//! a widely-used algorithm for reducing English words to their stems.
//!
//! # Algorithm
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Input is trimmed and lowercased first. Words of two bytes or fewer are
//! returned as they are, so "as" does not collapse to "a".
//!
//! # Examples
//!
//! ```
//! use stemma::analysis::token_filter::stem::Stemmer;
//! use stemma::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

pub mod classify;
pub mod measure;
pub mod rules;
pub mod steps;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::Stemmer;

use self::steps::Step;

/// Words of this many bytes or fewer skip the rule pipeline.
pub const MIN_STEM_LEN: usize = 2;

/// Porter stemming algorithm implementation.
///
/// The stemmer holds no state, so a single instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Stem `word` and record the word after every sub-step.
    pub fn trace(&self, word: &str) -> StemTrace {
        let input = word.to_string();
        let normalized = normalize(word);

        if normalized.len() <= MIN_STEM_LEN {
            return StemTrace {
                input,
                stem: normalized.clone(),
                normalized,
                steps: Vec::new(),
            };
        }

        let mut current = normalized.clone();
        let mut steps = Vec::with_capacity(Step::ALL.len());
        for step in Step::ALL {
            let next = step.apply(&current);
            steps.push(StepTrace {
                step,
                changed: next != current,
                word: next.clone(),
            });
            current = next;
        }

        StemTrace {
            input,
            normalized,
            steps,
            stem: current,
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = normalize(word);
        if word.len() <= MIN_STEM_LEN {
            return word;
        }

        Step::ALL.iter().fold(word, |current, step| {
            let next = step.apply(&current);
            if next != current {
                trace!("step {}: {current} -> {next}", step.name());
            }
            next
        })
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// Stem a single English word with the Porter algorithm.
///
/// ```
/// assert_eq!(stemma::stem("caresses"), "caress");
/// assert_eq!(stemma::stem("  Hopping "), "hop");
/// ```
pub fn stem(word: &str) -> String {
    PorterStemmer.stem(word)
}

/// Trim surrounding whitespace and lowercase.
fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// The word after one sub-step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTrace {
    pub step: Step,
    pub word: String,
    pub changed: bool,
}

/// Every intermediate form a word went through while being stemmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemTrace {
    /// The word as given.
    pub input: String,

    /// The word after trimming and lowercasing.
    pub normalized: String,

    /// Results of each sub-step, empty for words that skip the pipeline.
    pub steps: Vec<StepTrace>,

    /// The final stem.
    pub stem: String,
}
