//! Client for the NCBI BLAST URL API.
//!
//! The API is asynchronous on the remote side: a `CMD=Put` POST creates a
//! job and returns a request identifier (RID), the job completes at some
//! unknown later time, and a `CMD=Get` GET retrieves results for a RID.
//! [`BlastClient`] wraps the three operations:
//!
//! - [`BlastClient::submit`]: create a job, extract the RID
//! - [`BlastClient::check_status`]: ask whether the job has finished
//! - [`BlastClient::fetch_report`]: retrieve the completed text report
//!
//! plus the polling loop in [`poll`] that drives `check_status` until the
//! job is ready. All calls are blocking; the client holds no job state, so
//! a RID from one process can be fetched by another.

use tracing::{debug, info};

use crate::core::{JobHandle, JobStatus};
use crate::parsing::rid::{scan_rid, RidScan};
use crate::parsing::status::scan_status;

pub mod poll;
pub mod transport;

use transport::Transport;

/// Public endpoint of the BLAST URL API
pub const DEFAULT_ENDPOINT: &str = "https://blast.ncbi.nlm.nih.gov/Blast.cgi";

/// Default search program
pub const DEFAULT_PROGRAM: &str = "blastn";

/// Default target database
pub const DEFAULT_DATABASE: &str = "nt";

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Transport or IO failure on an HTTP call
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response arrived but did not carry the expected marker, or the
    /// service reported the job as failed
    #[error("{0}")]
    Protocol(String),
}

/// Search parameters for a job submission
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Search program, e.g. `blastn`
    pub program: String,
    /// Target database, e.g. `nt`
    pub database: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

/// Blocking client for one BLAST endpoint
pub struct BlastClient<T: Transport> {
    transport: T,
    endpoint: String,
    params: SearchParams,
}

impl BlastClient<transport::HttpTransport> {
    /// Build a client over HTTPS for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Network` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, params: SearchParams) -> Result<Self, ClientError> {
        Ok(Self::with_transport(
            transport::HttpTransport::new()?,
            endpoint,
            params,
        ))
    }
}

impl<T: Transport> BlastClient<T> {
    /// Build a client over an arbitrary transport (scripted in tests)
    pub fn with_transport(transport: T, endpoint: impl Into<String>, params: SearchParams) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            params,
        }
    }

    /// Submit a nucleotide sequence as a new search job and return its
    /// handle.
    ///
    /// Issues exactly one POST; the sequence is form-encoded by the
    /// transport, so it may contain any characters. The sequence alphabet
    /// is not validated locally.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Network` on transport failure and
    /// `ClientError::Protocol` when the response carries no `RID = ` marker.
    pub fn submit(&self, sequence: &str) -> Result<JobHandle, ClientError> {
        debug!(
            "submitting {} bp query ({}/{})",
            sequence.len(),
            self.params.program,
            self.params.database
        );

        let form = [
            ("CMD", "Put"),
            ("PROGRAM", self.params.program.as_str()),
            ("DATABASE", self.params.database.as_str()),
            ("QUERY", sequence),
        ];
        let body = self.transport.post_form(&self.endpoint, &form)?;

        match scan_rid(&body) {
            RidScan::Found(handle) => {
                info!("job accepted, RID {handle}");
                Ok(handle)
            }
            RidScan::NotFound => Err(ClientError::Protocol(
                "RID not found in response.".to_string(),
            )),
        }
    }

    /// Ask the service whether a job has finished.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Network` on transport failure. A response with
    /// no recognizable status marker is [`JobStatus::Unknown`], not an
    /// error.
    pub fn check_status(&self, handle: &JobHandle) -> Result<JobStatus, ClientError> {
        let query = [
            ("CMD", "Get"),
            ("FORMAT_OBJECT", "SearchInfo"),
            ("RID", handle.as_str()),
        ];
        let body = self.transport.get(&self.endpoint, &query)?;

        let status = scan_status(&body);
        debug!("RID {handle} status: {status}");
        Ok(status)
    }

    /// Retrieve the text report for a completed job, verbatim.
    ///
    /// The body is returned without inspection; callers that skip the
    /// status check may receive a "still running" page instead of a report.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Network` on transport failure.
    pub fn fetch_report(&self, handle: &JobHandle) -> Result<String, ClientError> {
        let query = [
            ("CMD", "Get"),
            ("FORMAT_TYPE", "Text"),
            ("RID", handle.as_str()),
        ];
        let body = self.transport.get(&self.endpoint, &query)?;

        debug!("retrieved {} byte report for RID {handle}", body.len());
        Ok(body)
    }
}
