//! Contact-form mail: composition, transport backends and the background job
//!
//! The pipeline for one accepted submission is:
//!
//! 1. [`compose_contact_email`] turns a [`ContactSubmission`] into an [`Email`]
//! 2. an [`EmailSender`] backend (normally [`SmtpBackend`]) delivers it
//!
//! Both steps run inside a [`ContactEmailJob`], scheduled on
//! [`BackgroundJobs`](crate::jobs::BackgroundJobs) after the HTTP response has
//! already been produced.
//!
//! # Examples
//!
//! ```rust
//! use himex_web::email::{compose_contact_email, ContactSubmission, MailIdentity};
//!
//! # fn example() -> Result<(), himex_web::email::EmailError> {
//! let submission = ContactSubmission {
//!     first_name: "Jane".to_string(),
//!     last_name: "Doe".to_string(),
//!     email: "jane@example.com".to_string(),
//!     message: "Hello".to_string(),
//! };
//! let identity = MailIdentity {
//!     name: "Himex Logistic BV".to_string(),
//!     address: Some("info@example.com".to_string()),
//! };
//!
//! let email = compose_contact_email(&submission, &identity)?;
//! assert_eq!(email.subject.as_deref(), Some("Contact Form"));
//! # Ok(())
//! # }
//! ```

mod backend;
mod error;
mod job;
mod message;
mod sender;
mod template;

pub use backend::{
    console::ConsoleBackend,
    smtp::{SmtpBackend, SmtpConfig},
};
pub use error::{EmailError, MessagePart};
pub use message::Email;
pub use job::ContactEmailJob;
pub use sender::EmailSender;
#[cfg(test)]
pub use sender::MockEmailSender;
pub use template::{
    compose_contact_email, ContactEmail, ContactSubmission, MailIdentity, CONTACT_SUBJECT,
};
