//! # Batch Input Parsing
//!
//! Turns free-form text (one address per line, or a CSV export from some
//! other tool) into an ordered list of address candidates, split into those
//! that pass [`is_plausible_email`] and those that do not.
//!
//! ## Rules
//!
//! 1. A leading byte-order mark is dropped. Split on `\n` (a trailing `\r`
//!    is dropped with the rest of the surrounding whitespace), trim every
//!    line, discard blank lines. Trimming uses the same whitespace set as
//!    [`NormalizedInput`](crate::NormalizedInput).
//! 2. `Lines`: every remaining line is a candidate.
//! 3. `Csv`: only lines containing `@` are considered, which skips header
//!    rows. The candidate is the first comma-separated field containing `@`,
//!    trimmed, with `'` and `"` removed.
//!
//! Candidates are not normalized here; the dispatcher does that.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::email::is_plausible_email;
use crate::normalize::is_trimmed_whitespace;
use crate::error::BatchError;

/// How to interpret batch input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// One address per line.
    #[default]
    Lines,
    /// Comma-separated rows; the address is the first field containing `@`.
    Csv,
}

impl InputFormat {
    /// Guess the format from a file extension (`.csv`, any case → `Csv`).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Lines,
        }
    }
}

/// Candidates from one batch, partitioned by the email-shape check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedBatch {
    /// Candidates that look like email addresses, in input order.
    pub valid: Vec<String>,
    /// Candidates that were rejected, in input order.
    pub invalid: Vec<String>,
}

/// Parse batch input into address candidates.
///
/// # Errors
///
/// Returns [`BatchError::Empty`] when the input has no non-blank lines (or,
/// for CSV, no line containing `@`), and [`BatchError::NoValidAddresses`]
/// when every candidate is rejected.
pub fn parse_batch(text: &str, format: InputFormat) -> Result<ParsedBatch, BatchError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines = text
        .split('\n')
        .map(|l| l.trim_matches(is_trimmed_whitespace))
        .filter(|l| !l.is_empty());

    let candidates: Vec<String> = match format {
        InputFormat::Lines => lines.map(str::to_string).collect(),
        InputFormat::Csv => lines.filter(|l| l.contains('@')).map(csv_candidate).collect(),
    };

    if candidates.is_empty() {
        return Err(BatchError::Empty);
    }

    let (valid, invalid): (Vec<String>, Vec<String>) =
        candidates.into_iter().partition(|c| is_plausible_email(c));

    if valid.is_empty() {
        return Err(BatchError::NoValidAddresses { invalid });
    }

    Ok(ParsedBatch { valid, invalid })
}

fn csv_candidate(line: &str) -> String {
    match line.split(',').find(|field| field.contains('@')) {
        Some(field) => field
            .trim_matches(is_trimmed_whitespace)
            .chars()
            .filter(|c| !matches!(c, '\'' | '"'))
            .collect(),
        None => line.to_string(),
    }
}
