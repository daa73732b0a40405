//! Run command - the full submit, poll, retrieve, parse workflow.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{print_outcome, OutputFormat, PollOpts, SearchOpts};
use crate::parsing::query::load_query;
use crate::parsing::report::scan_identities;

#[derive(Args)]
pub struct RunArgs {
    /// Query file (bare sequence or FASTA; the first record is used)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub query: PathBuf,

    #[command(flatten)]
    pub search: SearchOpts,

    #[command(flatten)]
    pub poll: PollOpts,
}

/// Execute run subcommand
///
/// # Errors
///
/// Returns an error if the query cannot be read, submission fails, or the
/// job does not complete before the deadline. A report without an identity
/// line is a normal completion.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RunArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let sequence = load_query(&args.query)?;
    if verbose {
        eprintln!("Loaded {} bp query from {}", sequence.len(), args.query.display());
    }

    let client = args.search.client()?;

    progress(format, "Submitting BLAST job...");
    let handle = client.submit(&sequence)?;
    if verbose {
        eprintln!("RID: {handle}");
    }

    progress(format, "Waiting for results...");
    let report = client.wait_for_report(&handle, &args.poll.policy())?;

    progress(format, "Parsing result...");
    let identity = scan_identities(&report);

    print_outcome(Some(&handle), identity, format)
}

/// Progress lines go to stdout in text mode; JSON mode keeps stdout clean
/// for the document and reports progress on stderr instead.
pub(crate) fn progress(format: OutputFormat, message: &str) {
    match format {
        OutputFormat::Text => println!("{message}"),
        OutputFormat::Json => eprintln!("{message}"),
    }
}
