//! Parse command - scan a saved report without touching the network.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{print_outcome, OutputFormat};
use crate::parsing::report::scan_identities;

#[derive(Args)]
pub struct ParseArgs {
    /// Saved text report, or '-' for stdin
    #[arg(required = true)]
    pub report: PathBuf,
}

/// Execute parse subcommand
///
/// # Errors
///
/// Returns an error only if the report file cannot be read; a report with
/// no identity line is a normal outcome.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ParseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let report = if args.report.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.report)?
    };

    if verbose {
        eprintln!("Scanning {} byte report", report.len());
    }

    let identity = scan_identities(&report);
    print_outcome(None, identity, format)
}
