//! # Algorithms Subcommand
//!
//! Lists the supported algorithm identifiers with their display labels.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use mailhash_core::DigestAlgorithm;

/// Arguments for the `mailhash algorithms` subcommand.
#[derive(Args, Debug)]
pub struct AlgorithmsArgs {
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(serde::Serialize)]
struct AlgorithmInfo {
    id: DigestAlgorithm,
    name: &'static str,
    bytes: usize,
}

/// Execute the algorithms subcommand.
pub fn run_algorithms(args: &AlgorithmsArgs) -> Result<u8> {
    let mut stdout = std::io::stdout().lock();
    list_to(args, &mut stdout)?;
    Ok(0)
}

fn list_to(args: &AlgorithmsArgs, out: &mut impl Write) -> Result<()> {
    if args.json {
        let infos: Vec<AlgorithmInfo> = DigestAlgorithm::ALL
            .into_iter()
            .map(|id| AlgorithmInfo {
                id,
                name: id.display_name(),
                bytes: id.output_len(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &infos).context("failed to write JSON")?;
        writeln!(out)?;
    } else {
        for alg in DigestAlgorithm::ALL {
            writeln!(
                out,
                "{:<8}{:<9}{} hex chars",
                alg.as_str(),
                alg.display_name(),
                alg.output_len() * 2
            )?;
        }
    }
    Ok(())
}
