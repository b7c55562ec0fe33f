//! Outbound message value

use super::{EmailError, MessagePart};

/// An outbound HTML email
///
/// Built with chained setters; nothing is checked until a transport calls
/// [`Email::ensure_complete`].
///
/// ```rust
/// use himex_web::email::Email;
///
/// let email = Email::new()
///     .to("info@example.com")
///     .from("Himex Logistic BV <info@example.com>")
///     .subject("Contact Form")
///     .html("<h2>Form</h2>");
///
/// assert!(email.ensure_complete().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Email {
    /// `To` addresses
    pub to: Vec<String>,
    /// `From`, either `addr` or `Name <addr>`
    pub from: Option<String>,
    /// `Subject`
    pub subject: Option<String>,
    /// `text/html` body
    pub html: Option<String>,
}

impl Email {
    /// Empty message
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `To` address
    #[must_use]
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to.push(address.into());
        self
    }

    /// Set `From`
    #[must_use]
    pub fn from(self, mailbox: impl Into<String>) -> Self {
        Self {
            from: Some(mailbox.into()),
            ..self
        }
    }

    /// Set `Subject`
    #[must_use]
    pub fn subject(self, subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..self
        }
    }

    /// Set the HTML body
    #[must_use]
    pub fn html(self, body: impl Into<String>) -> Self {
        Self {
            html: Some(body.into()),
            ..self
        }
    }

    /// First required part that is still unset
    #[must_use]
    pub fn missing_part(&self) -> Option<MessagePart> {
        [
            (self.to.is_empty(), MessagePart::Recipient),
            (self.from.is_none(), MessagePart::Sender),
            (self.subject.is_none(), MessagePart::Subject),
            (self.html.is_none(), MessagePart::Body),
        ]
        .into_iter()
        .find_map(|(missing, part)| missing.then_some(part))
    }

    /// `Err(EmailError::Incomplete)` naming the first unset part
    ///
    /// Address syntax is left to the transport.
    pub fn ensure_complete(&self) -> Result<(), EmailError> {
        self.missing_part()
            .map_or(Ok(()), |part| Err(EmailError::Incomplete(part)))
    }
}
