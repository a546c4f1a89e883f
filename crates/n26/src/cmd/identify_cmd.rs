//! n26-identify - Report which files are N26 CSV exports.
//!
//! For every identified file the filing account and the file date (the
//! latest booking date in the export) are printed.

use crate::cmd::args::ImporterArgs;
use crate::cmd::init_tracing;
use anyhow::{Context, Result};
use clap::Parser;
use n26_importer::Importer;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Report which files are N26 CSV exports.
#[derive(Parser, Debug)]
#[command(name = "n26-identify")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    importer: ImporterArgs,

    /// The files to examine
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

/// Main entry point for the identify command.
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

    for file in &args.files {
        writeln!(out, "**** {}", file.display())?;

        let date = importer
            .file_date(file)
            .with_context(|| format!("failed to read {}", file.display()))?;

        match date {
            Some(date) => {
                writeln!(out, "Importer: {}", importer.name())?;
                writeln!(out, "Account:  {}", importer.file_account(file))?;
                writeln!(out, "Date:     {date}")?;
            }
            // An identified export without rows has no date either.
            None if importer.identify(file) => {
                writeln!(out, "Importer: {}", importer.name())?;
                writeln!(out, "Account:  {}", importer.file_account(file))?;
            }
            None => writeln!(out, "not identified")?,
        }
        writeln!(out)?;
    }

    Ok(())
}
