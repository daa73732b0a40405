//! Core data types shared across the crate.

pub mod types;

pub use types::{AlignmentIdentity, JobHandle, JobStatus};
