//! Background job for contact-form notifications

use std::sync::Arc;

use async_trait::async_trait;

use crate::email::{compose_contact_email, ContactSubmission, EmailError, EmailSender, MailIdentity};
use crate::jobs::{Job, JobError, JobResult};

/// Compose and deliver the notification for one accepted submission
///
/// Composition happens inside the job so that nothing after validation can
/// change the response the submitter receives.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use himex_web::email::{ConsoleBackend, ContactEmailJob, ContactSubmission, MailIdentity};
/// use himex_web::jobs::BackgroundJobs;
///
/// # async fn example(submission: ContactSubmission, identity: MailIdentity) {
/// let jobs = BackgroundJobs::new();
/// jobs.spawn(ContactEmailJob::new(
///     submission,
///     identity,
///     Arc::new(ConsoleBackend::new()),
/// ));
/// # }
/// ```
pub struct ContactEmailJob {
    submission: ContactSubmission,
    identity: MailIdentity,
    sender: Arc<dyn EmailSender>,
}

impl ContactEmailJob {
    /// Create a new notification job
    #[must_use]
    pub fn new(
        submission: ContactSubmission,
        identity: MailIdentity,
        sender: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            submission,
            identity,
            sender,
        }
    }
}

impl From<EmailError> for JobError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::NotConfigured(reason) => Self::Misconfigured(reason),
            other => Self::ExecutionFailed(format!("email send failed: {other}")),
        }
    }
}

#[async_trait]
impl Job for ContactEmailJob {
    fn name(&self) -> &'static str {
        "contact_email"
    }

    async fn execute(&self) -> JobResult<()> {
        let email = compose_contact_email(&self.submission, &self.identity)?;
        self.sender.send(email).await?;
        Ok(())
    }
}
