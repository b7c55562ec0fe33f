//! Configuration management for himex-web
//!
//! Configuration is loaded once at startup from multiple sources with clear
//! precedence:
//!
//! 1. `HOST_EMAIL` / `HOST_PASSWORD` (mail account, highest priority)
//! 2. Environment variables (`HIMEX_` prefix, `__` for nesting)
//! 3. `./config.toml` (development)
//! 4. `~/.config/himex-web/config.toml` (user config, XDG)
//! 5. `/etc/himex-web/config.toml` (system config)
//! 6. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//!
//! [mail]
//! transport = "smtp"
//! relay_host = "mail.privateemail.com"
//! relay_port = 465
//! sender_name = "Himex Logistic BV"
//!
//! [assets]
//! static_dir = "./static"
//! cache_max_age_secs = 1200
//! ```
//!
//! The mail account itself normally comes from the environment:
//!
//! ```text
//! HOST_EMAIL=info@example.com HOST_PASSWORD=... himex-web
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::email::MailIdentity;

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,

    /// TCP port to bind
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerSettings {
    /// `host:port` string suitable for `TcpListener::bind`
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which backend delivers contact-form mail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailTransport {
    /// Deliver through the SMTPS relay
    #[default]
    Smtp,
    /// Log messages instead of sending them (local development)
    Console,
}

/// Outbound mail settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    /// Delivery backend
    pub transport: MailTransport,

    /// SMTPS relay hostname
    pub relay_host: String,

    /// SMTPS relay port (implicit TLS)
    pub relay_port: u16,

    /// Display name used in the From header
    pub sender_name: String,

    /// Mailbox used as sender, recipient and SMTP login (`HOST_EMAIL`)
    pub address: Option<String>,

    /// SMTP password (`HOST_PASSWORD`)
    #[serde(skip_serializing)]
    pub password: Option<Secret<String>>,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            transport: MailTransport::Smtp,
            relay_host: "mail.privateemail.com".to_string(),
            relay_port: 465,
            sender_name: "Himex Logistic BV".to_string(),
            address: None,
            password: None,
        }
    }
}

impl MailSettings {
    /// Whether both halves of the mail account are present
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.address.is_some() && self.password.is_some()
    }

    /// Sender identity used by the mail composer
    #[must_use]
    pub fn identity(&self) -> MailIdentity {
        MailIdentity {
            name: self.sender_name.clone(),
            address: self.address.clone(),
        }
    }
}

/// Static asset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory served under `/static`
    pub static_dir: PathBuf,

    /// `max-age` applied to successful responses
    pub cache_max_age_secs: u64,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("./static"),
            cache_max_age_secs: 1200,
        }
    }
}

/// Complete site configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Outbound mail settings
    #[serde(default)]
    pub mail: MailSettings,

    /// Static asset settings
    #[serde(default)]
    pub assets: AssetSettings,
}

impl SiteConfig {
    /// Load configuration for a service from the standard locations
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use himex_web::config::SiteConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = SiteConfig::load_for_service("himex-web")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Self::defaults()?;

        let system_config = PathBuf::from("/etc").join(service_name).join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        Ok(Self::with_environment(figment).extract()?)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error; defaults and the environment still apply.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let figment = Self::defaults()?.merge(Toml::file(path.as_ref()));
        Ok(Self::with_environment(figment).extract()?)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// ```rust
    /// use himex_web::config::SiteConfig;
    ///
    /// let path = SiteConfig::recommended_path("himex-web");
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| config_dir.join(service_name).join("config.toml"),
        )
    }

    fn defaults() -> anyhow::Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    /// Mail account variables are taken verbatim; figment's `Env` would parse
    /// a password like `12345678` or `true` into a non-string value.
    fn with_environment(figment: Figment) -> Figment {
        let mut figment = figment.merge(Env::prefixed("HIMEX_").split("__").lowercase(true));

        for (var, key) in [("HOST_EMAIL", "mail.address"), ("HOST_PASSWORD", "mail.password")] {
            if let Ok(value) = std::env::var(var) {
                figment = figment.merge((key, value));
            }
        }

        figment
    }
}
