//! Application state shared by all handlers
//!
//! Everything here is read-only after startup apart from the job counters,
//! which are atomic.

use std::sync::Arc;

use crate::config::{MailTransport, SiteConfig};
use crate::email::{ConsoleBackend, EmailSender, SmtpBackend, SmtpConfig};
use crate::jobs::BackgroundJobs;

/// Application state
///
/// # Example
///
/// ```rust
/// use himex_web::{config::SiteConfig, state::AppState};
///
/// let state = AppState::new(SiteConfig::default());
/// assert_eq!(state.config().server.port, 8000);
/// ```
#[derive(Clone)]
pub struct AppState {
    config: Arc<SiteConfig>,
    mailer: Arc<dyn EmailSender>,
    jobs: BackgroundJobs,
}

impl AppState {
    /// Create state with the mail backend selected by `config.mail.transport`
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let mailer: Arc<dyn EmailSender> = match config.mail.transport {
            MailTransport::Smtp => Arc::new(SmtpBackend::new(SmtpConfig::from(&config.mail))),
            MailTransport::Console => Arc::new(ConsoleBackend::verbose()),
        };
        Self::with_mailer(config, mailer)
    }

    /// Create state with an explicit mail backend
    #[must_use]
    pub fn with_mailer(config: SiteConfig, mailer: Arc<dyn EmailSender>) -> Self {
        Self {
            config: Arc::new(config),
            mailer,
            jobs: BackgroundJobs::new(),
        }
    }

    /// Site configuration
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Mail backend used by contact-form jobs
    #[must_use]
    pub fn mailer(&self) -> Arc<dyn EmailSender> {
        Arc::clone(&self.mailer)
    }

    /// Background job handle
    #[must_use]
    pub const fn jobs(&self) -> &BackgroundJobs {
        &self.jobs
    }
}
