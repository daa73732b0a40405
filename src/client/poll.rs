//! Polling loop for asynchronous job completion.
//!
//! A submitted job finishes at an unknown later time. Rather than a single
//! fixed sleep, the client re-checks the job status at a fixed interval
//! until the service reports it ready, it reports it failed, or a hard
//! deadline passes. The interval defaults to the 15 seconds the service
//! documentation suggests between polls; growth is deliberately linear.

use std::time::{Duration, Instant};

use tracing::info;

use crate::client::transport::Transport;
use crate::client::{BlastClient, ClientError};
use crate::core::{JobHandle, JobStatus};

/// Pacing for the status poll loop
#[derive(Debug, Clone, Copy)]
pub struct BackoffPolicy {
    /// Pause between consecutive status checks, and before the first one
    pub interval: Duration,
    /// Total budget; polling stops with an error once this has elapsed
    pub deadline: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(15),
            deadline: Duration::from_secs(600),
        }
    }
}

impl<T: Transport> BlastClient<T> {
    /// Poll until the job is ready, then return immediately.
    ///
    /// The first check happens after one interval, matching the service's
    /// request not to poll a job that was just submitted. A status of
    /// [`JobStatus::Unknown`] is treated as still-pending.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Network` if a status check fails, and
    /// `ClientError::Protocol` when the service reports the job failed or
    /// the deadline elapses first.
    pub fn wait_until_ready(
        &self,
        handle: &JobHandle,
        policy: &BackoffPolicy,
    ) -> Result<(), ClientError> {
        let start = Instant::now();
        loop {
            if start.elapsed() >= policy.deadline {
                return Err(ClientError::Protocol(format!(
                    "deadline exceeded while polling RID {handle}"
                )));
            }
            std::thread::sleep(policy.interval);

            match self.check_status(handle)? {
                JobStatus::Ready => {
                    info!("RID {handle} ready after {:.0?}", start.elapsed());
                    return Ok(());
                }
                JobStatus::Failed => {
                    return Err(ClientError::Protocol(format!(
                        "search failed on the server for RID {handle}"
                    )));
                }
                JobStatus::Pending | JobStatus::Unknown => {}
            }
        }
    }

    /// Poll until ready, then retrieve the text report.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::wait_until_ready`] and
    /// [`Self::fetch_report`].
    pub fn wait_for_report(
        &self,
        handle: &JobHandle,
        policy: &BackoffPolicy,
    ) -> Result<String, ClientError> {
        self.wait_until_ready(handle, policy)?;
        self.fetch_report(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_service_guidance() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(15));
        assert!(policy.deadline > policy.interval);
    }
}
