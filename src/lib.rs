//! # blast-fetch
//!
//! A library and CLI for driving the NCBI BLAST URL API end to end.
//!
//! BLAST searches on the public service are asynchronous: submitting a query
//! returns a request identifier (RID) immediately, the search completes on
//! NCBI's side at some unknown later time, and results are retrieved in a
//! second round trip. `blast-fetch` handles the whole exchange (submit,
//! poll until ready, retrieve the plain-text report) and extracts the
//! identity statistics of the best alignment from it.
//!
//! ## Features
//!
//! - **Asynchronous job handling**: explicit status polling with an interval
//!   and deadline instead of a blind fixed wait
//! - **Resumable workflows**: submission and retrieval are independent, so a
//!   RID from one run can be collected by a later one
//! - **Tagged scan results**: "marker absent" (no RID, no status, no
//!   identity line) is distinguished from transport failure everywhere
//! - **Offline parsing**: saved reports can be re-scanned without a network
//!
//! ## Example
//!
//! ```rust,no_run
//! use blast_fetch::client::poll::BackoffPolicy;
//! use blast_fetch::client::{BlastClient, SearchParams, DEFAULT_ENDPOINT};
//! use blast_fetch::parsing::report::scan_identities;
//!
//! let client = BlastClient::new(DEFAULT_ENDPOINT, SearchParams::default()).unwrap();
//!
//! let rid = client.submit("GTAGGTCTTTGGCATTAGGAGCTTGAGCCCAGACGG").unwrap();
//! let report = client.wait_for_report(&rid, &BackoffPolicy::default()).unwrap();
//!
//! match scan_identities(&report) {
//!     Some(identity) => println!("Percent Identity: {}%", identity.percent_identity),
//!     None => println!("No alignment found."),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`]: job submission, status polling, and report retrieval
//! - [`core`]: core data types for handles, statuses, and identities
//! - [`parsing`]: scanners for the service's free-text responses
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod client;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use client::{BlastClient, ClientError, SearchParams};
pub use core::types::*;
