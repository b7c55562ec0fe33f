use thiserror::Error;

/// Result of a job execution
pub type JobResult<T> = Result<T, JobError>;

/// Reasons a background job ends unsuccessfully
#[derive(Debug, Error)]
pub enum JobError {
    /// The job ran and failed
    #[error("job execution failed: {0}")]
    ExecutionFailed(String),

    /// The job could not start because a dependency is misconfigured
    #[error("job misconfigured: {0}")]
    Misconfigured(String),
}
