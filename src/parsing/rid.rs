//! Extraction of the request identifier (RID) from a job submission response.
//!
//! A successful `CMD=Put` response is an HTML page containing, somewhere in a
//! comment block, a line of the form:
//!
//! ```text
//!     RID = 5KZ1Y2B4013
//! ```
//!
//! The token is one run of non-whitespace characters; everything after the
//! first whitespace character belongs to the surrounding page, not the RID.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::JobHandle;

static RID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RID = (\S+)").expect("RID pattern is valid"));

/// Outcome of scanning a submission response for the RID marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RidScan {
    /// Marker present; the captured token is non-empty and whitespace-free
    Found(JobHandle),
    /// No `RID = ` marker anywhere in the body
    NotFound,
}

/// Scan a submission response body for the first `RID = <token>` marker
#[must_use]
pub fn scan_rid(body: &str) -> RidScan {
    match RID_RE.captures(body) {
        Some(caps) => RidScan::Found(JobHandle::new(&caps[1])),
        None => RidScan::NotFound,
    }
}
