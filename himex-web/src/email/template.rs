//! Contact-form submission and the mail composer
//!
//! The message body is an Askama template (`templates/emails/contact.html`).
//! Submitted values are embedded verbatim: the template marks every field
//! `|safe`, so markup typed into the form reaches the site owner's mail
//! client unchanged.

use askama::Template;
use serde::Deserialize;
use validator::Validate;

use super::{Email, EmailError};

/// Fixed subject line of every contact-form notification
pub const CONTACT_SUBJECT: &str = "Contact Form";

/// A contact-form submission as posted by the `/contact` page
///
/// Field names on the wire are `fname`, `lname`, `email` and `message`.
/// All four are required; an empty value counts as missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct ContactSubmission {
    /// Submitter's first name
    #[serde(rename = "fname")]
    #[validate(length(min = 1, message = "value is required"))]
    pub first_name: String,

    /// Submitter's last name
    #[serde(rename = "lname")]
    #[validate(length(min = 1, message = "value is required"))]
    pub last_name: String,

    /// Submitter's address; must be syntactically valid
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,

    /// Free-text message
    #[validate(length(min = 1, message = "value is required"))]
    pub message: String,
}

/// Who the notification is from and to
///
/// The site owner mails themselves: the same mailbox is used as From, To and
/// SMTP login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailIdentity {
    /// Display name for the From header
    pub name: String,

    /// Mailbox address, `None` when `HOST_EMAIL` is not configured
    pub address: Option<String>,
}

impl MailIdentity {
    /// `Name <address>` form of the From header
    #[must_use]
    pub fn mailbox(&self, address: &str) -> String {
        if self.name.trim().is_empty() {
            address.to_string()
        } else {
            format!("{} <{address}>", self.name)
        }
    }
}

/// HTML body of a contact-form notification
#[derive(Template)]
#[template(path = "emails/contact.html")]
pub struct ContactEmail<'a> {
    /// First name, embedded verbatim
    pub first_name: &'a str,
    /// Last name, embedded verbatim
    pub last_name: &'a str,
    /// Submitter address, embedded verbatim
    pub email: &'a str,
    /// Message, embedded verbatim
    pub message: &'a str,
}

impl<'a> From<&'a ContactSubmission> for ContactEmail<'a> {
    fn from(submission: &'a ContactSubmission) -> Self {
        Self {
            first_name: &submission.first_name,
            last_name: &submission.last_name,
            email: &submission.email,
            message: &submission.message,
        }
    }
}

/// Build the notification for one accepted submission
///
/// Pure: nothing is sent here.
///
/// # Errors
///
/// Returns `EmailError::NotConfigured` when the identity has no address and
/// `EmailError::Render` if the body fails to render.
pub fn compose_contact_email(
    submission: &ContactSubmission,
    identity: &MailIdentity,
) -> Result<Email, EmailError> {
    let address = identity
        .address
        .as_deref()
        .ok_or_else(|| EmailError::not_configured("HOST_EMAIL is not set"))?;

    let body = ContactEmail::from(submission).render()?;

    Ok(Email::new()
        .to(address)
        .from(identity.mailbox(address))
        .subject(CONTACT_SUBJECT)
        .html(body))
}
