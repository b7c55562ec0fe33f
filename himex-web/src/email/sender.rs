//! Delivery seam between the job and a transport

use async_trait::async_trait;

use super::{Email, EmailError};

/// A mail transport
///
/// [`AppState`](crate::state::AppState) holds one as `Arc<dyn EmailSender>`,
/// chosen from `mail.transport` at startup; tests substitute recording or
/// failing implementations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver one message, returning once the transport is done with it
    async fn send(&self, email: Email) -> Result<(), EmailError>;
}
