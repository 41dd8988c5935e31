//! CLI runner for the conformance suite.

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use utfcell_conformance::{run_all, RunOptions, Severity};

/// Exhaustive conformance runner for the utfcell transcoder.
#[derive(Debug, Parser)]
#[command(name = "utfcell-conformance", version, about)]
struct Args {
    /// Thin the exhaustive sweeps to roughly a thousandth.
    #[arg(long)]
    quick: bool,

    /// Run only the named validator (repeatable):
    /// register-io, encode, decode, utf16.
    #[arg(long = "only", value_name = "VALIDATOR")]
    only: Vec<String>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let report = run_all(&RunOptions {
        quick: args.quick,
        only: args.only,
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        for result in &report.results {
            let tag = match result.severity {
                Severity::Pass => "PASS",
                Severity::Failure => "FAIL",
            };
            writeln!(
                out,
                "{tag} {}/{} — {} cases, {} failures",
                result.validator, result.family, result.cases, result.failures
            )?;
            for detail in &result.details {
                writeln!(out, "     {detail}")?;
            }
        }
        writeln!(
            out,
            "{} cases, {} failures",
            report.case_count(),
            report.failure_count()
        )?;
    }

    if report.all_passed() {
        Ok(())
    } else {
        std::process::exit(1)
    }
}
