//! SMTPS relay transport
//!
//! Connects with implicit TLS (port 465 by default), authenticates with the
//! site mailbox, submits one message and quits. `lettre` is built without its
//! connection pool, so no connection outlives a send.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use secrecy::{ExposeSecret, Secret};
use tracing::debug;

use crate::config::MailSettings;
use crate::email::{Email, EmailError, EmailSender, MessagePart};

/// Relay address and login
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay hostname, also the TLS server name
    pub host: String,
    /// Relay port
    pub port: u16,
    /// Login, `None` until `HOST_EMAIL` is configured
    pub username: Option<String>,
    /// Password, `None` until `HOST_PASSWORD` is configured
    pub password: Option<Secret<String>>,
}

impl From<&MailSettings> for SmtpConfig {
    fn from(settings: &MailSettings) -> Self {
        Self {
            host: settings.relay_host.clone(),
            port: settings.relay_port,
            username: settings.address.clone(),
            password: settings.password.clone(),
        }
    }
}

/// Delivers through the configured SMTPS relay
///
/// Missing credentials are not rejected here; each send reports them as
/// `EmailError::NotConfigured` before any connection is attempted.
///
/// ```rust,no_run
/// use himex_web::config::SiteConfig;
/// use himex_web::email::{Email, EmailSender, SmtpBackend, SmtpConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SiteConfig::load_for_service("himex-web")?;
/// let relay = SmtpBackend::new(SmtpConfig::from(&config.mail));
///
/// relay
///     .send(
///         Email::new()
///             .to("info@example.com")
///             .from("info@example.com")
///             .subject("Contact Form")
///             .html("<p>Hello</p>"),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SmtpBackend {
    config: SmtpConfig,
}

fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address
        .parse()
        .map_err(|_| EmailError::InvalidAddress(address.to_string()))
}

fn required(value: Option<&str>, part: MessagePart) -> Result<&str, EmailError> {
    value.ok_or(EmailError::Incomplete(part))
}

impl SmtpBackend {
    /// Backend for one relay
    #[must_use]
    pub const fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// RFC 5322 message with an HTML body
    fn to_message(email: &Email) -> Result<Message, EmailError> {
        email.ensure_complete()?;

        let mut builder = Message::builder()
            .from(parse_mailbox(required(email.from.as_deref(), MessagePart::Sender)?)?)
            .subject(required(email.subject.as_deref(), MessagePart::Subject)?)
            .header(ContentType::TEXT_HTML);

        for recipient in &email.to {
            builder = builder.to(parse_mailbox(recipient)?);
        }

        let body = required(email.html.as_deref(), MessagePart::Body)?;
        builder
            .body(body.to_string())
            .map_err(|e| EmailError::transport(e.to_string()))
    }

    fn credentials(&self) -> Result<Credentials, EmailError> {
        let login = self
            .config
            .username
            .as_deref()
            .ok_or_else(|| EmailError::not_configured("HOST_EMAIL is not set"))?;
        let password = self
            .config
            .password
            .as_ref()
            .ok_or_else(|| EmailError::not_configured("HOST_PASSWORD is not set"))?;

        Ok(Credentials::new(
            login.to_string(),
            password.expose_secret().clone(),
        ))
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let credentials = self.credentials()?;

        Ok(AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)
            .map_err(|e| EmailError::transport(e.to_string()))?
            .port(self.config.port)
            .credentials(credentials)
            .build())
    }
}

#[async_trait]
impl EmailSender for SmtpBackend {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        let message = Self::to_message(&email)?;
        let transport = self.transport()?;

        debug!(relay = %self.config.host, port = self.config.port, "Submitting to relay");
        let response = transport
            .send(message)
            .await
            .map_err(|e| EmailError::transport(e.to_string()))?;
        debug!(code = %response.code(), "Relay accepted message");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay() -> SmtpConfig {
        SmtpConfig {
            host: "mail.example.com".to_string(),
            port: 465,
            username: Some("info@example.com".to_string()),
            password: Some(Secret::new("hunter2".to_string())),
        }
    }

    fn notification() -> Email {
        Email::new()
            .to("info@example.com")
            .from("Himex Logistic BV <info@example.com>")
            .subject("Contact Form")
            .html("<h2>Form</h2>")
    }

    #[test]
    fn test_config_follows_mail_settings() {
        let settings = MailSettings {
            address: Some("info@example.com".to_string()),
            ..MailSettings::default()
        };

        let config = SmtpConfig::from(&settings);

        assert_eq!(config.host, "mail.privateemail.com");
        assert_eq!(config.port, 465);
        assert_eq!(config.username.as_deref(), Some("info@example.com"));
        assert!(config.password.is_none());
    }

    #[test]
    fn test_message_is_html_with_subject() {
        let message = SmtpBackend::to_message(&notification()).unwrap();
        let wire = String::from_utf8(message.formatted()).unwrap();

        assert!(wire.contains("Subject: Contact Form"));
        assert!(wire.contains("Content-Type: text/html"));
        assert!(wire.contains("To: info@example.com"));
    }

    #[test]
    fn test_bad_recipient_is_reported() {
        let email = Email {
            to: vec!["not an address".to_string()],
            ..notification()
        };

        assert!(matches!(
            SmtpBackend::to_message(&email),
            Err(EmailError::InvalidAddress(address)) if address == "not an address"
        ));
    }

    #[test]
    fn test_incomplete_message_is_reported() {
        let email = Email {
            subject: None,
            ..notification()
        };

        assert!(matches!(
            SmtpBackend::to_message(&email),
            Err(EmailError::Incomplete(MessagePart::Subject))
        ));
    }

    #[test]
    fn test_credentials_are_required() {
        for config in [
            SmtpConfig {
                password: None,
                ..relay()
            },
            SmtpConfig {
                username: None,
                ..relay()
            },
        ] {
            assert!(matches!(
                SmtpBackend::new(config).transport(),
                Err(EmailError::NotConfigured(_))
            ));
        }

        assert!(SmtpBackend::new(relay()).transport().is_ok());
    }

    #[tokio::test]
    async fn test_send_without_credentials_never_connects() {
        let backend = SmtpBackend::new(SmtpConfig {
            username: None,
            password: None,
            ..relay()
        });

        let result = backend.send(notification()).await;
        assert!(matches!(result, Err(EmailError::NotConfigured(_))));
    }
}
