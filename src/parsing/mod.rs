//! Parsers for the text formats crossing the BLAST service boundary.
//!
//! This module provides scanners for:
//!
//! - **Submission responses**: extract the `RID = <token>` job handle marker
//! - **`SearchInfo` responses**: extract the `Status=<WORD>` job state marker
//! - **Text reports**: extract the `Identities = m/n (p%)` alignment line
//! - **Query input**: load a sequence from plain text, FASTA, or stdin
//!
//! All scanners are pure functions over `&str`; "marker absent" is a tagged
//! outcome (`RidScan::NotFound`, `JobStatus::Unknown`, `None`), never a
//! panic, and deciding whether absence is an error is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use blast_fetch::parsing::report::scan_identities;
//!
//! let report = " Identities = 45/50 (90%), Gaps = 0/50 (0%)\n";
//! let identity = scan_identities(report).unwrap();
//! assert_eq!(identity.percent_identity, 90);
//! ```

pub mod query;
pub mod report;
pub mod rid;
pub mod status;
