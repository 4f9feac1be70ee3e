//! `reqwest`-backed shortening client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::api::dto::{ShortenRequest, ShortenResponse};
use crate::config::Config;
use crate::domain::shortening_client::ShorteningClient;
use crate::error::RequestError;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("mkrl/", env!("CARGO_PKG_VERSION"));

/// HTTP client for `POST <base>/shorten`.
///
/// Sends a single request per call; there is no retry. The transport timeout
/// covers connecting, sending and reading the response.
#[derive(Debug, Clone)]
pub struct HttpShorteningClient {
    client: Client,
    endpoint: String,
}

impl HttpShorteningClient {
    /// Builds a client for an absolute `endpoint` URL.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Transport`] if the underlying client cannot be built
    /// (e.g. TLS backend initialization fails).
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, RequestError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.to_owned())
            .build()
            .map_err(|e| {
                RequestError::Transport(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Builds a client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &Config) -> Result<Self, RequestError> {
        Self::new(
            config.shorten_endpoint(),
            config.request_timeout(),
            &config.user_agent,
        )
    }

    /// Absolute URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ShorteningClient for HttpShorteningClient {
    async fn shorten(&self, long_url: &str) -> Result<String, RequestError> {
        debug!(endpoint = %self.endpoint, "Sending shorten request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ShortenRequest { long_url })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }

        let body: ShortenResponse = response.json().await?;

        if !body.has_valid_code() {
            return Err(RequestError::MalformedBody(format!(
                "unusable short_code {:?}",
                body.short_code
            )));
        }

        Ok(body.short_code)
    }
}
