use std::fmt;

use async_trait::async_trait;
use uuid::Uuid;

use super::JobResult;

/// Unique identifier of a scheduled job, used for log correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(Uuid);

impl JobId {
    /// Generate a fresh random id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A unit of work that runs detached from the request that created it
#[async_trait]
pub trait Job: Send + Sync + 'static {
    /// Short, stable name for logs
    fn name(&self) -> &'static str;

    /// Run the job to completion
    ///
    /// # Errors
    ///
    /// Returns `JobError` if the work failed. The error is logged by the
    /// runner; nobody else observes it.
    async fn execute(&self) -> JobResult<()>;
}
