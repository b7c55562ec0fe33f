//! Fire-and-forget background jobs
//!
//! A [`Job`] is handed to [`BackgroundJobs::spawn`], which starts it on the
//! Tokio runtime and returns immediately. The caller gets a [`JobId`] for log
//! correlation and nothing else:
//!
//! - jobs are never awaited by the code that scheduled them
//! - jobs cannot be cancelled once scheduled
//! - jobs are not retried; a failure is logged and counted, then dropped
//! - jobs still running at process shutdown are abandoned
//!
//! # Example
//!
//! ```rust
//! use himex_web::jobs::{BackgroundJobs, Job, JobResult};
//! use async_trait::async_trait;
//!
//! struct Ping;
//!
//! #[async_trait]
//! impl Job for Ping {
//!     fn name(&self) -> &'static str {
//!         "ping"
//!     }
//!
//!     async fn execute(&self) -> JobResult<()> {
//!         tracing::info!("pong");
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let jobs = BackgroundJobs::new();
//! let id = jobs.spawn(Ping);
//! tracing::debug!(job.id = %id, "scheduled");
//! # }
//! ```

mod error;
mod job;
mod runner;

pub use error::{JobError, JobResult};
pub use job::{Job, JobId};
pub use runner::{BackgroundJobs, JobStats};
