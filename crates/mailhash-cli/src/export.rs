//! # Result Export
//!
//! Renders hashed addresses as plain `address,hash` lines, a CSV document
//! with a header row, or a JSON array.
//!
//! The address column always holds the normalized address, i.e. exactly the
//! text that was hashed.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use mailhash_core::DigestAlgorithm;

/// One hashed address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashedAddress {
    /// Normalized address.
    pub email: String,
    /// Algorithm used.
    pub algorithm: DigestAlgorithm,
    /// Lowercase hex digest.
    pub hash: String,
}

/// `address,hash` per line, no header.
pub fn render_plain(rows: &[HashedAddress]) -> String {
    rows.iter()
        .map(|r| format!("{},{}\n", csv_field(&r.email), r.hash))
        .collect()
}

/// CSV document with an `Email,<Algorithm> Hash` header row.
pub fn render_csv(rows: &[HashedAddress], algorithm: DigestAlgorithm) -> String {
    let mut out = format!("Email,{} Hash\n", algorithm.display_name());
    out.push_str(&render_plain(rows));
    out
}

/// Pretty-printed JSON array of `{email, algorithm, hash}` objects.
pub fn render_json(rows: &[HashedAddress]) -> serde_json::Result<String> {
    let mut s = serde_json::to_string_pretty(rows)?;
    s.push('\n');
    Ok(s)
}

/// File name used when exporting into a directory,
/// e.g. `email_sha256_hashes_2026-03-01.csv`.
pub fn default_export_file_name(algorithm: DigestAlgorithm, date: NaiveDate, ext: &str) -> String {
    format!("email_{}_hashes_{}.{ext}", algorithm.as_str(), date.format("%Y-%m-%d"))
}

/// Resolve `--out`: a directory gets the default file name appended.
pub fn resolve_output_path(
    out: &Path,
    algorithm: DigestAlgorithm,
    date: NaiveDate,
    ext: &str,
) -> PathBuf {
    if out.is_dir() {
        out.join(default_export_file_name(algorithm, date, ext))
    } else {
        out.to_path_buf()
    }
}

/// Quote a field if it contains a comma, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
