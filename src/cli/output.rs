//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::token_filter::stem::porter::StemTrace;
use crate::cli::args::{OutputFormat, StemmaArgs};
use crate::error::Result;
use crate::vocabulary::VerificationReport;

/// A word and its stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemPair {
    pub word: String,
    pub stem: String,
}

/// Distinct stems of a word list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniqueStems {
    pub words_processed: usize,
    pub stems: Vec<String>,
}

/// Verification outcome together with how many mismatches to print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationOutput {
    #[serde(flatten)]
    pub report: VerificationReport,

    #[serde(skip)]
    pub max_shown: usize,
}

/// A command result that can be rendered in every output format.
pub trait Report: Serialize {
    /// Write the result for a person reading a terminal.
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()>;

    /// Column names for CSV output.
    fn csv_header(&self) -> &'static [&'static str];

    /// Rows for CSV output, one per record.
    fn csv_rows(&self) -> Vec<Vec<String>>;
}

impl Report for Vec<StemPair> {
    fn write_human(&self, out: &mut dyn Write, _verbosity: u8) -> io::Result<()> {
        for pair in self {
            writeln!(out, "{} -> {}", pair.word, pair.stem)?;
        }
        Ok(())
    }

    fn csv_header(&self) -> &'static [&'static str] {
        &["word", "stem"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|pair| vec![pair.word.clone(), pair.stem.clone()])
            .collect()
    }
}

impl Report for UniqueStems {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()> {
        for stem in &self.stems {
            writeln!(out, "{stem}")?;
        }
        if verbosity > 1 {
            writeln!(
                out,
                "{} distinct stems from {} words",
                self.stems.len(),
                self.words_processed
            )?;
        }
        Ok(())
    }

    fn csv_header(&self) -> &'static [&'static str] {
        &["stem"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.stems.iter().map(|stem| vec![stem.clone()]).collect()
    }
}

impl Report for VerificationOutput {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()> {
        let report = &self.report;
        if verbosity > 0 {
            for mismatch in report.mismatches.iter().take(self.max_shown) {
                writeln!(
                    out,
                    "line {}: {} -> {} (expected {})",
                    mismatch.line, mismatch.word, mismatch.actual, mismatch.expected
                )?;
            }
            let hidden = report.mismatches.len().saturating_sub(self.max_shown);
            if hidden > 0 {
                writeln!(out, "... and {hidden} more")?;
            }
        }
        writeln!(
            out,
            "{}: {}/{} stems match",
            report.stemmer, report.passed, report.total
        )
    }

    fn csv_header(&self) -> &'static [&'static str] {
        &["line", "word", "expected", "actual"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.report
            .mismatches
            .iter()
            .map(|m| {
                vec![
                    m.line.to_string(),
                    m.word.clone(),
                    m.expected.clone(),
                    m.actual.clone(),
                ]
            })
            .collect()
    }
}

impl Report for StemTrace {
    fn write_human(&self, out: &mut dyn Write, _verbosity: u8) -> io::Result<()> {
        writeln!(out, "{} -> {}", self.input, self.stem)?;
        if self.steps.is_empty() {
            writeln!(out, "  (too short to stem)")?;
        }
        for step in &self.steps {
            let marker = if step.changed { "*" } else { " " };
            writeln!(out, "  {marker} {:<3} {}", step.step.name(), step.word)?;
        }
        Ok(())
    }

    fn csv_header(&self) -> &'static [&'static str] {
        &["step", "word", "changed"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.steps
            .iter()
            .map(|s| {
                vec![
                    s.step.name().to_string(),
                    s.word.clone(),
                    s.changed.to_string(),
                ]
            })
            .collect()
    }
}

impl Report for Vec<Token> {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()> {
        for token in self {
            match (&token.original_text, verbosity > 1) {
                (Some(original), true) => writeln!(
                    out,
                    "{:>3}  {:<16} {}..{}  ({original})",
                    token.position, token.text, token.start_offset, token.end_offset
                )?,
                _ => writeln!(
                    out,
                    "{:>3}  {:<16} {}..{}",
                    token.position, token.text, token.start_offset, token.end_offset
                )?,
            }
        }
        Ok(())
    }

    fn csv_header(&self) -> &'static [&'static str] {
        &["position", "text", "start_offset", "end_offset", "original_text"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|t| {
                vec![
                    t.position.to_string(),
                    t.text.clone(),
                    t.start_offset.to_string(),
                    t.end_offset.to_string(),
                    t.original_text.clone().unwrap_or_default(),
                ]
            })
            .collect()
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Report>(result: &T, args: &StemmaArgs, out: &mut dyn Write) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => result.write_human(out, args.verbosity())?,
        OutputFormat::Json => output_json(result, args, out)?,
        OutputFormat::Csv => output_csv(result, out)?,
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &StemmaArgs, out: &mut dyn Write) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: Report>(result: &T, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", result.csv_header().join(","))?;
    for row in result.csv_rows() {
        let fields: Vec<String> = row.iter().map(|f| format_csv_field(f)).collect();
        writeln!(out, "{}", fields.join(","))?;
    }
    Ok(())
}

/// Quote a CSV field when it contains a separator, quote or newline.
fn format_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        let escaped = field.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        field.to_string()
    }
}
