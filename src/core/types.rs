use serde::{Deserialize, Serialize};
use tracing::warn;

/// Opaque request identifier assigned by the BLAST service to track an
/// asynchronous job
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobHandle(pub String);

impl JobHandle {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remote state of a submitted job, as reported by the service's
/// `FORMAT_OBJECT=SearchInfo` response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Job is queued or still running (`Status=WAITING`)
    Pending,
    /// Results are available for retrieval (`Status=READY`)
    Ready,
    /// The service reported a permanent failure (`Status=FAILED`)
    Failed,
    /// No recognizable status marker in the response.
    /// The service occasionally serves interstitial pages; callers should
    /// treat this as still-pending rather than an error.
    Unknown,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Ready => write!(f, "ready"),
            Self::Failed => write!(f, "failed"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Identity statistics for the best alignment in a BLAST text report
///
/// All three fields are read literally from the `Identities = m/n (p%)` line.
/// The percentage is not recomputed from `matched_bases / total_bases`; when
/// the two disagree a warning is logged but the reported values are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentIdentity {
    /// Bases that match between query and subject
    pub matched_bases: u64,

    /// Total aligned bases
    pub total_bases: u64,

    /// Percent identity as printed in the report
    pub percent_identity: u32,
}

impl AlignmentIdentity {
    #[must_use]
    pub fn new(matched_bases: u64, total_bases: u64, percent_identity: u32) -> Self {
        let identity = Self {
            matched_bases,
            total_bases,
            percent_identity,
        };
        if !identity.is_consistent() {
            warn!(
                "reported identity {percent_identity}% disagrees with \
                 {matched_bases}/{total_bases}"
            );
        }
        identity
    }

    /// Whether the reported percentage agrees with the matched/total ratio
    /// within one percentage point (reports round to whole percents)
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.total_bases == 0 {
            return false;
        }
        #[allow(clippy::cast_precision_loss)]
        let computed = self.matched_bases as f64 / self.total_bases as f64 * 100.0;
        (computed - f64::from(self.percent_identity)).abs() <= 1.0
    }
}

impl std::fmt::Display for AlignmentIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} ({}%)",
            self.matched_bases, self.total_bases, self.percent_identity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_handle_display() {
        let handle = JobHandle::new("5KZ1Y2B4013");
        assert_eq!(handle.to_string(), "5KZ1Y2B4013");
        assert_eq!(handle.as_str(), "5KZ1Y2B4013");
    }

    #[test]
    fn test_identity_consistency() {
        assert!(AlignmentIdentity::new(45, 50, 90).is_consistent());
        assert!(AlignmentIdentity::new(60, 65, 92).is_consistent());

        // Literal values are kept even when inconsistent
        let bogus = AlignmentIdentity::new(10, 50, 99);
        assert!(!bogus.is_consistent());
        assert_eq!(bogus.percent_identity, 99);
    }

    #[test]
    fn test_identity_display() {
        let identity = AlignmentIdentity::new(60, 65, 92);
        assert_eq!(identity.to_string(), "60/65 (92%)");
    }
}
