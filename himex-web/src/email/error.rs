//! Failures while composing or delivering mail

use std::fmt;

use thiserror::Error;

/// Header or body a message cannot be sent without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagePart {
    /// At least one `To` address
    Recipient,
    /// `From`
    Sender,
    /// `Subject`
    Subject,
    /// HTML body
    Body,
}

impl fmt::Display for MessagePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Recipient => "recipient",
            Self::Sender => "sender",
            Self::Subject => "subject",
            Self::Body => "body",
        })
    }
}

/// Mail pipeline error
#[derive(Debug, Error)]
pub enum EmailError {
    /// A required part was never set
    #[error("message has no {0}")]
    Incomplete(MessagePart),

    /// An address did not parse as a mailbox
    #[error("`{0}` is not a valid mailbox")]
    InvalidAddress(String),

    /// The body template failed
    #[error("could not render message body: {0}")]
    Render(#[from] askama::Error),

    /// Connecting, authenticating or transmitting failed
    #[error("mail relay failure: {0}")]
    Transport(String),

    /// Account or relay settings are missing
    #[error("mail is not configured: {0}")]
    NotConfigured(String),
}

impl EmailError {
    /// Relay-side failure
    #[must_use]
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport(reason.into())
    }

    /// Missing or unusable settings
    #[must_use]
    pub fn not_configured(reason: impl Into<String>) -> Self {
        Self::NotConfigured(reason.into())
    }
}
