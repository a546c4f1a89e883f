//! n26-extract - Extract transactions from N26 CSV exports.
//!
//! # Usage
//!
//! ```bash
//! n26-extract export.csv --account Assets:N26 --pattern 'Expenses:Food=^REWE'
//! n26-extract --config n26.json export-*.csv >> ledger.beancount
//! ```

use crate::cmd::args::ImporterArgs;
use crate::cmd::init_tracing;
use anyhow::{Context, Result};
use clap::Parser;
use n26_core::{format_transaction, FormatConfig};
use n26_importer::Importer;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Extract transactions from N26 CSV exports.
#[derive(Parser, Debug)]
#[command(name = "n26-extract")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    importer: ImporterArgs,

    /// Column to align amounts to
    #[arg(long, default_value = "60")]
    amount_column: usize,

    /// The exports to extract transactions from
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

/// Main entry point for the extract command.
pub fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.importer.verbose);

    let mut stdout = io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let importer = args.importer.build_importer()?;
    let fmt_config = FormatConfig::with_column(args.amount_column);

    for file in &args.files {
        if !importer.identify(file) {
            tracing::warn!("{} is not an N26 export, skipping", file.display());
            continue;
        }

        let transactions = importer
            .extract(file, &[])
            .with_context(|| format!("failed to extract from {}", file.display()))?;

        writeln!(out, ";; {}", file.display())?;
        writeln!(out)?;
        for txn in &transactions {
            writeln!(out, "{}", format_transaction(txn, &fmt_config))?;
        }
    }

    Ok(())
}
