//! Job status extraction from `FORMAT_OBJECT=SearchInfo` responses.
//!
//! While a job is in flight the service reports its state as a
//! `Status=<WORD>` marker inside a comment block:
//!
//! ```text
//! <!--QBlastInfoBegin
//!     Status=WAITING
//! QBlastInfoEnd
//! -->
//! ```
//!
//! `READY` additionally comes with a `ThereAreHits=yes` marker when the
//! search produced alignments, but retrieval does not depend on it.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::JobStatus;

static STATUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Status=(\S+)").expect("status pattern is valid"));

/// Scan a `SearchInfo` response body for the job status marker.
///
/// Anything other than the three documented states (including a missing
/// marker) maps to [`JobStatus::Unknown`]; the poll loop treats that as
/// still-pending.
#[must_use]
pub fn scan_status(body: &str) -> JobStatus {
    match STATUS_RE.captures(body).map(|caps| caps[1].to_string()) {
        Some(word) if word == "WAITING" => JobStatus::Pending,
        Some(word) if word == "READY" => JobStatus::Ready,
        Some(word) if word == "FAILED" => JobStatus::Failed,
        _ => JobStatus::Unknown,
    }
}
