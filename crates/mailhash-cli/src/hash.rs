//! # Hash Subcommand
//!
//! Digest a single address and print the lowercase hex digest.
//!
//! The normalized input must pass the same email-shape check as batch
//! entries. `--no-validate` hashes arbitrary text instead.

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Args;

use mailhash_core::{is_plausible_email, DigestAlgorithm, NormalizedInput};
use mailhash_crypto::{Dispatcher, RustCryptoProvider};

use crate::{parse_algorithm, ALGORITHM_ENV, DEFAULT_ALGORITHM};

/// Arguments for the `mailhash hash` subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Address to digest. Trimmed and lowercased first.
    pub text: String,

    /// Digest algorithm: md5, sha1, sha256, or sha512.
    #[arg(
        short,
        long,
        env = ALGORITHM_ENV,
        default_value = DEFAULT_ALGORITHM,
        value_parser = parse_algorithm
    )]
    pub algorithm: DigestAlgorithm,

    /// Hash the text even if it does not look like an email address.
    #[arg(long)]
    pub no_validate: bool,
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    let mut stdout = std::io::stdout().lock();
    hash_to(args, &mut stdout)?;
    Ok(0)
}

fn hash_to(args: &HashArgs, out: &mut impl Write) -> Result<()> {
    let input = NormalizedInput::new(&args.text);
    if input.is_empty() {
        bail!("no email address given");
    }
    if !is_plausible_email(input.as_str()) {
        if !args.no_validate {
            bail!("{:?} is not a valid email address", input.as_str());
        }
        tracing::warn!(input = %input, "hashing text that is not an email address");
    }

    let digest = Dispatcher::<RustCryptoProvider>::default()
        .digest_normalized(&input, args.algorithm)
        .with_context(|| format!("failed to compute {} digest", args.algorithm.display_name()))?;

    tracing::info!(algorithm = %args.algorithm, "digest computed");
    writeln!(out, "{digest}").context("failed to write digest")?;
    Ok(())
}
