//! Error types for folio-contact.
//!
//! Form validation failures are not errors: they are reported to the user as
//! [`Signal`](crate::signal::Signal)s. The types here cover configuration,
//! transport, and the plumbing around them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for folio-contact operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// A configuration file named on the command line does not exist.
    #[error("configuration file not found: {path}")]
    ConfigMissing {
        /// Path that was requested.
        path: PathBuf,
    },

    // === Delivery Errors ===
    /// The delivery service answered with a non-success status.
    #[error("delivery rejected with status {status}: {body}")]
    Delivery {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response text returned by the service.
        body: String,
    },

    /// The request to the delivery service could not be completed.
    #[error("delivery transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured endpoint could not be turned into a request URL.
    #[error("invalid delivery endpoint '{endpoint}': {message}")]
    Endpoint {
        /// The configured endpoint.
        endpoint: String,
        /// Description of what went wrong.
        message: String,
    },
}

/// A specialized Result type for folio-contact operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create a delivery rejection error.
    #[must_use]
    pub fn delivery(status: u16, body: impl Into<String>) -> Self {
        Self::Delivery {
            status,
            body: body.into(),
        }
    }

    /// Create an endpoint error.
    #[must_use]
    pub fn endpoint(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Endpoint {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from talking to the delivery service.
    #[must_use]
    pub fn is_delivery_error(&self) -> bool {
        matches!(self, Self::Delivery { .. } | Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::delivery(400, "The service ID is invalid");
        assert_eq!(
            err.to_string(),
            "delivery rejected with status 400: The service ID is invalid"
        );

        let err = Error::config_validation("delivery.service_id must be set");
        assert_eq!(
            err.to_string(),
            "invalid configuration: delivery.service_id must be set"
        );
    }

    #[test]
    fn test_is_delivery_error() {
        assert!(Error::delivery(500, "boom").is_delivery_error());
        assert!(!Error::endpoint("ftp://nope", "unsupported scheme").is_delivery_error());
        assert!(!Error::config_validation("bad").is_delivery_error());
    }

    #[test]
    fn test_endpoint_error_display() {
        let err = Error::endpoint("ftp://nope", "unsupported scheme");
        let msg = err.to_string();
        assert!(msg.contains("ftp://nope"));
        assert!(msg.contains("unsupported scheme"));
    }

    #[test]
    fn test_config_missing_display() {
        let err = Error::ConfigMissing {
            path: PathBuf::from("/etc/folio/config.toml"),
        };
        assert!(err.to_string().contains("/etc/folio/config.toml"));
    }

    #[test]
    fn test_from_figment_error() {
        let err: Error = figment::Error::from("missing field".to_string()).into();
        assert!(matches!(err, Error::ConfigLoad(_)));
        assert!(err.to_string().contains("missing field"));
    }
}
