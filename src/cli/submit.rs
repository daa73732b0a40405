//! Submit command - create a job and print its RID without waiting.
//!
//! Useful for long searches: submit now, then collect any time later with
//! `blast-fetch fetch <RID>`. The service keeps results for about 36 hours.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{OutputFormat, SearchOpts};
use crate::parsing::query::load_query;

#[derive(Args)]
pub struct SubmitArgs {
    /// Query file (bare sequence or FASTA; the first record is used)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub query: PathBuf,

    #[command(flatten)]
    pub search: SearchOpts,
}

/// Execute submit subcommand
///
/// # Errors
///
/// Returns an error if the query cannot be read or the service does not
/// return a RID.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SubmitArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let sequence = load_query(&args.query)?;
    if verbose {
        eprintln!("Loaded {} bp query from {}", sequence.len(), args.query.display());
    }

    let client = args.search.client()?;
    let handle = client.submit(&sequence)?;

    match format {
        OutputFormat::Text => println!("RID: {handle}"),
        OutputFormat::Json => {
            let json = serde_json::json!({ "rid": handle.as_str() });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
