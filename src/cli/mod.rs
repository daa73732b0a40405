//! Command-line interface for blast-fetch.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **run**: submit a query, wait for completion, print percent identity
//! - **submit**: submit a query and print the RID only
//! - **fetch**: wait for and parse the report of a previously submitted RID
//! - **parse**: scan a saved text report without touching the network
//!
//! ## Usage
//!
//! ```text
//! # Submit a FASTA query and wait for the result
//! blast-fetch run query.fa
//!
//! # Pipe a bare sequence from stdin
//! echo ACGTACGTACGT | blast-fetch run -
//!
//! # Submit now, collect later
//! blast-fetch submit query.fa
//! blast-fetch fetch 5KZ1Y2B4013
//!
//! # JSON output for scripting
//! blast-fetch run query.fa --format json
//!
//! # Re-scan a report saved earlier
//! blast-fetch parse report.txt
//! ```

use clap::{Parser, Subcommand};

use crate::client::poll::BackoffPolicy;
use crate::client::{BlastClient, SearchParams};
use crate::client::transport::HttpTransport;
use crate::core::{AlignmentIdentity, JobHandle};

pub mod fetch;
pub mod parse;
pub mod run;
pub mod submit;

#[derive(Parser)]
#[command(name = "blast-fetch")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Submit nucleotide queries to NCBI BLAST and extract percent identity")]
#[command(
    long_about = "blast-fetch drives the NCBI BLAST URL API end to end: it submits a nucleotide query, polls until the asynchronous search completes, retrieves the plain-text report, and extracts the identity statistics of the best alignment.\n\nSubmission and retrieval are separate commands as well, so a long-running search can be submitted now and collected later by its RID."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a query and wait for its result
    Run(run::RunArgs),

    /// Submit a query and print its RID
    Submit(submit::SubmitArgs),

    /// Wait for and parse the report of an existing RID
    Fetch(fetch::FetchArgs),

    /// Scan a saved text report for identity statistics
    Parse(parse::ParseArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Options selecting the search the service should run
#[derive(clap::Args, Debug)]
pub struct SearchOpts {
    /// BLAST program to run
    #[arg(long, default_value = crate::client::DEFAULT_PROGRAM)]
    pub program: String,

    /// Target database to search
    #[arg(long, default_value = crate::client::DEFAULT_DATABASE)]
    pub database: String,

    /// Service endpoint URL
    #[arg(long, default_value = crate::client::DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

/// Options pacing the completion poll loop
#[derive(clap::Args, Debug)]
pub struct PollOpts {
    /// Seconds between status checks
    #[arg(long, default_value = "15")]
    pub poll_interval: u64,

    /// Give up after this many seconds of polling
    #[arg(long, default_value = "600")]
    pub deadline: u64,
}

impl SearchOpts {
    /// Build an HTTPS client for these options
    pub(crate) fn client(&self) -> anyhow::Result<BlastClient<HttpTransport>> {
        let params = SearchParams {
            program: self.program.clone(),
            database: self.database.clone(),
        };
        Ok(BlastClient::new(self.endpoint.clone(), params)?)
    }
}

impl PollOpts {
    pub(crate) fn policy(&self) -> BackoffPolicy {
        BackoffPolicy {
            interval: std::time::Duration::from_secs(self.poll_interval),
            deadline: std::time::Duration::from_secs(self.deadline),
        }
    }
}

/// Print the terminal outcome of a workflow in the requested format
pub(crate) fn print_outcome(
    rid: Option<&JobHandle>,
    identity: Option<AlignmentIdentity>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => match identity {
            Some(identity) => {
                println!(
                    "Alignment: {}/{}",
                    identity.matched_bases, identity.total_bases
                );
                println!("Percent Identity: {}%", identity.percent_identity);
            }
            None => println!("No alignment found."),
        },
        OutputFormat::Json => {
            let json = serde_json::json!({
                "rid": rid.map(JobHandle::as_str),
                "alignment": identity,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}
