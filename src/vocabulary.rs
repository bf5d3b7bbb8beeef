//! Word lists and verification against expected stems.
//!
//! Porter's published test data comes as two parallel files: a vocabulary
//! with one word per line and the expected stem for each word on the same
//! line of a second file. [`Vocabulary::verify_against`] checks a stemmer
//! against such a pair.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::Stemmer;
use crate::error::{Result, StemmaError};

/// An ordered list of words, one per non-blank input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    entries: Vec<Entry>,
}

/// A word and the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub line: usize,
    pub word: String,
}

impl Vocabulary {
    /// Build a vocabulary from in-memory words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = words
            .into_iter()
            .enumerate()
            .map(|(i, word)| Entry {
                line: i + 1,
                word: word.into(),
            })
            .collect();
        Vocabulary { entries }
    }

    /// Read one word per line. Lines are trimmed and blank lines skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut entries = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            entries.push(Entry {
                line: i + 1,
                word: word.to_string(),
            });
        }
        Ok(Vocabulary { entries })
    }

    /// Read a word list from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            StemmaError::vocabulary(format!("cannot open {}: {e}", path.display()))
        })?;
        let vocabulary = Self::from_reader(BufReader::new(file))?;
        debug!("read {} words from {}", vocabulary.len(), path.display());
        Ok(vocabulary)
    }

    /// Get the number of words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vocabulary has no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entries in input order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over the words in input order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Stem every word of this vocabulary and compare it with the word on
    /// the same position of `expected`.
    pub fn verify_against(
        &self,
        expected: &Vocabulary,
        stemmer: &dyn Stemmer,
    ) -> Result<VerificationReport> {
        if self.len() != expected.len() {
            return Err(StemmaError::vocabulary(format!(
                "vocabulary has {} words but expected output has {}",
                self.len(),
                expected.len()
            )));
        }

        let mismatches: Vec<Mismatch> = self
            .entries
            .iter()
            .zip(expected.words())
            .filter_map(|(entry, want)| {
                let actual = stemmer.stem(&entry.word);
                (actual != want).then(|| Mismatch {
                    line: entry.line,
                    word: entry.word.clone(),
                    expected: want.to_string(),
                    actual,
                })
            })
            .collect();

        let report = VerificationReport {
            stemmer: stemmer.name().to_string(),
            total: self.len(),
            passed: self.len() - mismatches.len(),
            mismatches,
        };
        info!(
            "{}: {}/{} stems match",
            report.stemmer, report.passed, report.total
        );
        Ok(report)
    }
}

/// A word whose stem differed from the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub line: usize,
    pub word: String,
    pub expected: String,
    pub actual: String,
}

/// Outcome of verifying a stemmer against expected stems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub stemmer: String,
    pub total: usize,
    pub passed: usize,
    pub mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    /// Check if every stem matched.
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }
}
