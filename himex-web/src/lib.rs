//! himex-web: marketing website and contact-form mail relay
//!
//! Serves the company's templated pages, decorates every response with a
//! fixed set of headers, and relays contact-form submissions to the site
//! owner's mailbox over SMTPS.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use himex_web::{config::SiteConfig, observability, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     observability::init()?;
//!
//!     let config = SiteConfig::load_for_service("himex-web")?;
//!     server::serve(config).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Request pipeline
//!
//! ```text
//! request ─► TraceLayer ─► cache headers ─► security headers ─► font MIME ─► router
//!                                                                           ├─ pages
//!                                                                           ├─ /sendmail ─► BackgroundJobs (detached)
//!                                                                           └─ /static
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod email;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod jobs;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod template;

pub mod prelude {
    //! Convenience re-exports for common types and traits

    pub use crate::config::SiteConfig;
    pub use crate::email::{
        ConsoleBackend, ContactEmailJob, ContactSubmission, Email, EmailError, EmailSender,
        MailIdentity, MessagePart, SmtpBackend,
    };
    pub use crate::error::SiteError;
    pub use crate::extractors::{ValidatedForm, ValidationError};
    pub use crate::jobs::{BackgroundJobs, Job, JobError, JobId, JobResult};
    pub use crate::state::AppState;
    pub use crate::template::{PageContext, PageTemplate};
}
