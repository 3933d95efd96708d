//! # Batch Subcommand
//!
//! Digest every address in a list read from a file or stdin.
//!
//! ## Usage
//!
//! ```bash
//! # One address per line, plain `address,hash` output:
//! mailhash batch addresses.txt
//!
//! # CSV export with header, written to a dated file in exports/:
//! mailhash batch contacts.csv -a sha256 --csv --out exports/
//!
//! # From stdin as JSON:
//! cat addresses.txt | mailhash batch --json
//! ```
//!
//! Entries that do not look like email addresses are logged and skipped.
//! The command fails when nothing valid remains.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use mailhash_core::{parse_batch, DigestAlgorithm, InputFormat, NormalizedInput};
use mailhash_crypto::{DigestProvider, Dispatcher, RustCryptoProvider};

use crate::export::{self, HashedAddress};
use crate::{parse_algorithm, ALGORITHM_ENV, DEFAULT_ALGORITHM};

/// Arguments for the `mailhash batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input file (.txt or .csv). Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Digest algorithm: md5, sha1, sha256, or sha512.
    #[arg(
        short,
        long,
        env = ALGORITHM_ENV,
        default_value = DEFAULT_ALGORITHM,
        value_parser = parse_algorithm
    )]
    pub algorithm: DigestAlgorithm,

    /// Input format. Defaults to `csv` for `.csv` files, `lines` otherwise.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Render a CSV document with a header row.
    #[arg(long, conflicts_with = "json")]
    pub csv: bool,

    /// Render a JSON array.
    #[arg(long)]
    pub json: bool,

    /// Write output to this file (or into this directory with a dated
    /// file name) instead of stdout. Implies `--csv` unless `--json`.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Batch input formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One address per line.
    Lines,
    /// Comma-separated rows; the first field containing `@` is used.
    Csv,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Lines => InputFormat::Lines,
            FormatArg::Csv => InputFormat::Csv,
        }
    }
}

/// How the results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputStyle {
    Plain,
    Csv,
    Json,
}

impl OutputStyle {
    fn from_args(args: &BatchArgs) -> Self {
        if args.json {
            Self::Json
        } else if args.csv || args.out.as_deref().is_some_and(|p| !is_stdio(p)) {
            Self::Csv
        } else {
            Self::Plain
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Plain | Self::Csv => "csv",
        }
    }
}

/// Execute the batch subcommand.
pub fn run_batch(args: &BatchArgs) -> Result<u8> {
    let text = read_input(args.input.as_deref())?;
    let format = input_format(args);
    let style = OutputStyle::from_args(args);

    let dispatcher = Dispatcher::<RustCryptoProvider>::default();
    let rows = hash_batch(&dispatcher, &text, format, args.algorithm)?;
    let rendered = render(&rows, args.algorithm, style)?;

    match args.out.as_deref().filter(|p| !is_stdio(p)) {
        Some(out) => {
            let today = chrono::Utc::now().date_naive();
            let path = export::resolve_output_path(out, args.algorithm, today, style.extension());
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), rows = rows.len(), "results written");
            eprintln!(
                "Wrote {} {} hashes to {}",
                rows.len(),
                args.algorithm.display_name(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("failed to write results")?;
        }
    }

    Ok(0)
}

/// Parse `text` and digest every valid address, in input order.
///
/// Invalid entries are logged at `warn` and skipped.
pub fn hash_batch<P: DigestProvider>(
    dispatcher: &Dispatcher<P>,
    text: &str,
    format: InputFormat,
    algorithm: DigestAlgorithm,
) -> Result<Vec<HashedAddress>> {
    let parsed = parse_batch(text, format).context("no addresses to hash")?;

    if !parsed.invalid.is_empty() {
        for entry in &parsed.invalid {
            tracing::warn!(entry = %entry, "skipping invalid email address");
        }
        tracing::warn!(
            count = parsed.invalid.len(),
            "{} invalid email(s) will be skipped",
            parsed.invalid.len()
        );
    }

    let rows = parsed
        .valid
        .iter()
        .map(|email| {
            let input = NormalizedInput::new(email);
            let digest = dispatcher
                .digest_normalized(&input, algorithm)
                .with_context(|| format!("failed to hash {email:?}"))?;
            Ok(HashedAddress {
                email: input.as_str().to_string(),
                algorithm,
                hash: digest.to_hex(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        algorithm = %algorithm,
        hashed = rows.len(),
        skipped = parsed.invalid.len(),
        "batch complete"
    );
    Ok(rows)
}

fn render(rows: &[HashedAddress], algorithm: DigestAlgorithm, style: OutputStyle) -> Result<String> {
    Ok(match style {
        OutputStyle::Plain => export::render_plain(rows),
        OutputStyle::Csv => export::render_csv(rows, algorithm),
        OutputStyle::Json => export::render_json(rows).context("failed to serialize results")?,
    })
}

fn input_format(args: &BatchArgs) -> InputFormat {
    match (args.format, args.input.as_deref()) {
        (Some(f), _) => f.into(),
        (None, Some(path)) if !is_stdio(path) => InputFormat::from_path(path),
        (None, _) => InputFormat::Lines,
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input.filter(|p| !is_stdio(p)) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading batch input");
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            tracing::debug!("reading batch input from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}
