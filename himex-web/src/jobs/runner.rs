use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tracing::Instrument;

use super::{Job, JobId};

#[derive(Debug, Default)]
struct Counters {
    scheduled: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
}

/// Point-in-time job counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobStats {
    /// Jobs handed to [`BackgroundJobs::spawn`]
    pub scheduled: u64,
    /// Jobs that returned `Ok`
    pub succeeded: u64,
    /// Jobs that returned `Err`
    pub failed: u64,
}

impl JobStats {
    /// Jobs that have run to completion either way
    #[must_use]
    pub const fn finished(&self) -> u64 {
        self.succeeded + self.failed
    }
}

/// Handle for scheduling detached background jobs
///
/// Cheap to clone; clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct BackgroundJobs {
    counters: Arc<Counters>,
}

impl BackgroundJobs {
    /// Create a new job handle with zeroed counters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `job` and return without waiting for it
    ///
    /// Must be called from within a Tokio runtime. The spawned task's handle
    /// is dropped, so the job cannot be awaited or aborted afterwards.
    pub fn spawn<J: Job>(&self, job: J) -> JobId {
        let id = JobId::new();
        let name = job.name();
        let counters = Arc::clone(&self.counters);

        counters.scheduled.fetch_add(1, Ordering::Relaxed);

        let span = tracing::info_span!("background_job", job.id = %id, job.name = name);
        let task = async move {
            match job.execute().await {
                Ok(()) => {
                    counters.succeeded.fetch_add(1, Ordering::Relaxed);
                    tracing::info!("Background job completed");
                }
                Err(err) => {
                    counters.failed.fetch_add(1, Ordering::Relaxed);
                    tracing::error!(error = %err, "Background job failed");
                }
            }
        };

        drop(tokio::spawn(task.instrument(span)));
        tracing::debug!(job.id = %id, job.name = name, "Background job scheduled");

        id
    }

    /// Current counters
    #[must_use]
    pub fn stats(&self) -> JobStats {
        JobStats {
            scheduled: self.counters.scheduled.load(Ordering::Relaxed),
            succeeded: self.counters.succeeded.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::{JobError, JobResult};
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::oneshot;

    struct Succeeds;

    #[async_trait]
    impl Job for Succeeds {
        fn name(&self) -> &'static str {
            "succeeds"
        }

        async fn execute(&self) -> JobResult<()> {
            Ok(())
        }
    }

    struct Fails;

    #[async_trait]
    impl Job for Fails {
        fn name(&self) -> &'static str {
            "fails"
        }

        async fn execute(&self) -> JobResult<()> {
            Err(JobError::ExecutionFailed("boom".to_string()))
        }
    }

    struct Gated(tokio::sync::Mutex<Option<oneshot::Receiver<()>>>);

    #[async_trait]
    impl Job for Gated {
        fn name(&self) -> &'static str {
            "gated"
        }

        async fn execute(&self) -> JobResult<()> {
            if let Some(rx) = self.0.lock().await.take() {
                let _ = rx.await;
            }
            Ok(())
        }
    }

    async fn wait_for_finished(jobs: &BackgroundJobs, expected: u64) -> JobStats {
        for _ in 0..200 {
            let stats = jobs.stats();
            if stats.finished() >= expected {
                return stats;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        jobs.stats()
    }

    #[tokio::test]
    async fn test_spawn_counts_success_and_failure() {
        let jobs = BackgroundJobs::new();

        jobs.spawn(Succeeds);
        jobs.spawn(Fails);

        let stats = wait_for_finished(&jobs, 2).await;
        assert_eq!(stats.scheduled, 2);
        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.failed, 1);
    }

    #[tokio::test]
    async fn test_spawn_returns_before_job_finishes() {
        let jobs = BackgroundJobs::new();
        let (tx, rx) = oneshot::channel();

        jobs.spawn(Gated(tokio::sync::Mutex::new(Some(rx))));

        let stats = jobs.stats();
        assert_eq!(stats.scheduled, 1);
        assert_eq!(stats.finished(), 0);

        tx.send(()).unwrap();
        let stats = wait_for_finished(&jobs, 1).await;
        assert_eq!(stats.succeeded, 1);
    }

    #[tokio::test]
    async fn test_clones_share_counters() {
        let jobs = BackgroundJobs::new();
        let clone = jobs.clone();

        clone.spawn(Succeeds);

        let stats = wait_for_finished(&jobs, 1).await;
        assert_eq!(stats.scheduled, 1);
        assert_eq!(stats.succeeded, 1);
    }
}
