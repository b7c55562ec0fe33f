//! Log-only mail transport
//!
//! Selected with `mail.transport = "console"` so the contact form can be
//! exercised locally without a mail account. Messages are checked for
//! completeness exactly like the SMTP path, then written to the log.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::email::{Email, EmailError, EmailSender};

/// Writes outgoing mail to the log instead of a relay
///
/// ```rust
/// use himex_web::email::{ConsoleBackend, Email, EmailSender};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let email = Email::new()
///     .to("info@example.com")
///     .from("info@example.com")
///     .subject("Contact Form")
///     .html("<p>Hello</p>");
///
/// ConsoleBackend::verbose().send(email).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleBackend {
    log_body: bool,
}

impl ConsoleBackend {
    /// Log headers only
    #[must_use]
    pub const fn new() -> Self {
        Self { log_body: false }
    }

    /// Log headers plus the HTML body at debug level
    #[must_use]
    pub const fn verbose() -> Self {
        Self { log_body: true }
    }
}

#[async_trait]
impl EmailSender for ConsoleBackend {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        email.ensure_complete()?;

        info!(
            from = email.from.as_deref().unwrap_or_default(),
            to = %email.to.join(", "),
            subject = email.subject.as_deref().unwrap_or_default(),
            "Mail logged, not sent"
        );

        if let (true, Some(body)) = (self.log_body, email.html.as_deref()) {
            debug!(body, "Mail body");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::MessagePart;

    fn notification() -> Email {
        Email::new()
            .to("info@example.com")
            .from("Himex Logistic BV <info@example.com>")
            .subject("Contact Form")
            .html("<h2>Form</h2>")
    }

    #[tokio::test]
    async fn test_logs_complete_message() {
        assert!(ConsoleBackend::new().send(notification()).await.is_ok());
        assert!(ConsoleBackend::verbose().send(notification()).await.is_ok());
    }

    #[tokio::test]
    async fn test_incomplete_message_is_refused() {
        let mut email = notification();
        email.html = None;

        assert!(matches!(
            ConsoleBackend::verbose().send(email).await,
            Err(EmailError::Incomplete(MessagePart::Body))
        ));
    }
}
