//! Configuration management for folio-contact.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "folio";

/// Environment variable prefix.
const ENV_PREFIX: &str = "FOLIO_";

/// Default delivery service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FOLIO_`, `__` between sections,
///    e.g. `FOLIO_DELIVERY__SERVICE_ID`)
/// 2. TOML config file at `~/.config/folio/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delivery service configuration.
    pub delivery: DeliveryConfig,
    /// Contact details shown next to the form.
    pub profile: ProfileConfig,
}

/// Email delivery service configuration.
///
/// The identifiers are issued by the delivery service. `public_key` identifies
/// the account; `private_key` is only needed when the account enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Base URL of the delivery API.
    pub endpoint: String,
    /// Email service identifier.
    pub service_id: String,
    /// Email template identifier.
    pub template_id: String,
    /// Account (public key) identifier.
    pub public_key: String,
    /// Optional account access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Request timeout in seconds.
    /// Set to 0 for no client-side timeout.
    pub timeout_secs: u64,
}

/// A labelled outbound link on the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Display label, e.g. "GitHub".
    pub label: String,
    /// Target URL.
    pub href: String,
}

/// Contact details shown beside the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Direct contact address.
    pub email: Option<String>,
    /// Availability note.
    pub availability: Option<String>,
    /// Social links.
    pub links: Vec<LinkConfig>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            private_key: None,
            timeout_secs: 0, // No deadline unless asked for
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file at the default location is fine; defaults and the
    /// environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigMissing`] if the file does not exist, or any
    /// error from [`Config::load_from`].
    pub fn load_existing(path: PathBuf) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigMissing { path });
        }
        Self::load_from(Some(path))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// Identifiers may still be empty here; see [`Config::require_delivery`].
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        match reqwest::Url::parse(&self.delivery.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(Error::config_validation(format!(
                    "delivery.endpoint must use http or https, got '{}'",
                    url.scheme()
                )));
            }
            Err(e) => {
                return Err(Error::config_validation(format!(
                    "delivery.endpoint is not a valid URL ({}): {e}",
                    self.delivery.endpoint
                )));
            }
        }

        for (i, link) in self.profile.links.iter().enumerate() {
            if link.label.trim().is_empty() || link.href.trim().is_empty() {
                return Err(Error::config_validation(format!(
                    "profile.links[{i}] needs both a label and an href"
                )));
            }
        }

        Ok(())
    }

    /// Check that everything needed to send a message is present.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first empty identifier.
    pub fn require_delivery(&self) -> Result<&DeliveryConfig> {
        let delivery = &self.delivery;
        for (key, value) in [
            ("service_id", &delivery.service_id),
            ("template_id", &delivery.template_id),
            ("public_key", &delivery.public_key),
        ] {
            if value.trim().is_empty() {
                return Err(Error::config_validation(format!(
                    "delivery.{key} must be set (or {ENV_PREFIX}DELIVERY__{})",
                    key.to_ascii_uppercase()
                )));
            }
        }
        Ok(delivery)
    }
}

impl DeliveryConfig {
    /// Get the request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}
