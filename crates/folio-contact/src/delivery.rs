//! Email delivery.
//!
//! [`DeliveryService`] is the seam between the controller and whatever
//! actually sends the message. [`EmailJsClient`] is the production
//! implementation: one JSON `POST` to an EmailJS-compatible REST API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Request, Url};
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::DeliveryConfig;
use crate::error::{Error, Result};
use crate::form::Payload;

/// Path of the send endpoint, relative to the configured base URL.
const SEND_PATH: &str = "api/v1.0/email/send";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Sends a contact message somewhere a human will read it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryService: Send + Sync {
    /// Deliver one message.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the service refuses the
    /// message. Callers treat every error the same way.
    async fn deliver(&self, payload: &Payload) -> Result<()>;
}

#[async_trait]
impl<T: DeliveryService + ?Sized> DeliveryService for Arc<T> {
    async fn deliver(&self, payload: &Payload) -> Result<()> {
        (**self).deliver(payload).await
    }
}

/// JSON body of a send request.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a Payload,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// HTTP client for an EmailJS-compatible delivery API.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: Client,
    send_url: Url,
    service_id: String,
    template_id: String,
    public_key: String,
    private_key: Option<String>,
}

impl EmailJsClient {
    /// Build a client from delivery configuration.
    ///
    /// The configured timeout, if any, applies to each whole request.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid base URL or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &DeliveryConfig) -> Result<Self> {
        let send_url = send_url(&config.endpoint)?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            send_url,
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            private_key: config.private_key.clone(),
        })
    }

    /// The URL messages are posted to.
    #[must_use]
    pub fn send_url(&self) -> &Url {
        &self.send_url
    }

    /// Build the send request for a payload without executing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be assembled.
    pub fn build_request(&self, payload: &Payload) -> Result<Request> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload,
            access_token: self.private_key.as_deref(),
        };
        Ok(self.http.post(self.send_url.clone()).json(&body).build()?)
    }
}

#[async_trait]
impl DeliveryService for EmailJsClient {
    async fn deliver(&self, payload: &Payload) -> Result<()> {
        let request = self.build_request(payload)?;
        trace!(url = %request.url(), "Posting contact message");

        let response = self.http.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Delivery service accepted message");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::delivery(status.as_u16(), body.trim()))
    }
}

/// Resolve the send URL against a base endpoint, keeping any base path.
fn send_url(endpoint: &str) -> Result<Url> {
    let mut base =
        Url::parse(endpoint).map_err(|e| Error::endpoint(endpoint, e.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(Error::endpoint(endpoint, "not usable as a base URL"));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(SEND_PATH)
        .map_err(|e| Error::endpoint(endpoint, e.to_string()))
}
