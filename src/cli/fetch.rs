//! Fetch command - wait for an existing RID and parse its report.

use clap::Args;

use crate::cli::run::progress;
use crate::cli::{print_outcome, OutputFormat, PollOpts, SearchOpts};
use crate::core::JobHandle;
use crate::parsing::report::scan_identities;

#[derive(Args)]
pub struct FetchArgs {
    /// Request identifier printed by a previous submit
    #[arg(required = true)]
    pub rid: String,

    /// Write the raw text report to this file as well
    #[arg(long)]
    pub save_report: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub search: SearchOpts,

    #[command(flatten)]
    pub poll: PollOpts,
}

/// Execute fetch subcommand
///
/// # Errors
///
/// Returns an error if the job failed remotely, the deadline elapses, or
/// the report cannot be retrieved or saved.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FetchArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let handle = JobHandle::new(args.rid.trim());
    let client = args.search.client()?;

    progress(format, "Waiting for results...");
    let report = client.wait_for_report(&handle, &args.poll.policy())?;

    if let Some(path) = &args.save_report {
        std::fs::write(path, &report)?;
    }

    progress(format, "Parsing result...");
    let identity = scan_identities(&report);

    print_outcome(Some(&handle), identity, format)
}
