//! # mailhash-cli: Command-Line Interface
//!
//! Provides the `mailhash` binary.
//!
//! ## Subcommands
//!
//! - `mailhash hash`: Digest a single address.
//! - `mailhash batch`: Digest every address in a text or CSV list.
//! - `mailhash algorithms`: List supported algorithms.
//!
//! ```bash
//! mailhash hash " User@Example.com "
//! mailhash batch contacts.csv -a sha256 --out exports/
//! cat list.txt | mailhash batch --json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to `mailhash-core` / `mailhash-crypto`.
//! - Diagnostics go to stderr through `tracing`; stdout carries results only.

pub mod algorithms;
pub mod batch;
pub mod export;
pub mod hash;

use mailhash_core::{DigestAlgorithm, DigestError};

/// Environment variable consulted for the default `--algorithm`.
pub const ALGORITHM_ENV: &str = "MAILHASH_ALGORITHM";

/// Algorithm used when neither `--algorithm` nor the environment sets one.
pub const DEFAULT_ALGORITHM: &str = "md5";

/// clap value parser for algorithm identifiers.
pub fn parse_algorithm(s: &str) -> Result<DigestAlgorithm, DigestError> {
    s.parse()
}
