//! # mailhash CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mailhash_cli::algorithms::{run_algorithms, AlgorithmsArgs};
use mailhash_cli::batch::{run_batch, BatchArgs};
use mailhash_cli::hash::{run_hash, HashArgs};

/// Normalize email addresses and compute MD5, SHA-1, SHA-256, or SHA-512
/// digests of them.
///
/// Every address is trimmed and lowercased before hashing, so
/// " User@Example.com " and "user@example.com" produce the same digest.
#[derive(Parser, Debug)]
#[command(name = "mailhash", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hash a single address.
    Hash(HashArgs),

    /// Hash every address in a text or CSV list.
    Batch(BatchArgs),

    /// List supported algorithms.
    Algorithms(AlgorithmsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_json);
    tracing::debug!("mailhash CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Commands::Hash(args) => run_hash(args),
        Commands::Batch(args) => run_batch(args),
        Commands::Algorithms(args) => run_algorithms(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// results.
fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
