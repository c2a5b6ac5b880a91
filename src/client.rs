//! HTTP client for the classification service.
//!
//! One method per endpoint. Every call is a single request with no retry;
//! non-2xx replies, transport faults, and malformed bodies all surface as
//! [`ClientError`]. Callers decide only between success and failure; the
//! error variants exist for logs.

use protocol::ProtocolError;
use protocol::wire::{self, ClassifyRequest, Endpoint, SaveRequest};
use serde::Serialize;

use crate::config::ClientConfig;

/// Errors produced by service calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never got a response (connect, timeout, I/O).
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service replied with an error status or an unusable body.
    #[error("{endpoint}: {source}")]
    Protocol {
        endpoint: &'static str,
        #[source]
        source: ProtocolError,
    },
}

/// Client for the classification service.
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClassifierClient {
    /// Build a client from config.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpClientBuild`] if the TLS backend cannot initialize.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| ClientError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the service which symbol `image` (bare base64 PNG) shows.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or a body
    /// without a `result` string.
    pub async fn classify(&self, image: &str) -> Result<String, ClientError> {
        let body = ClassifyRequest { image: image.to_owned() };
        let text = self.send(Endpoint::Classify, Some(&body)).await?;
        wire::decode_classify(&text).map_err(|source| protocol_error(Endpoint::Classify, source))
    }

    /// Store `image` under `symbol` for future training.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or non-2xx status.
    pub async fn save(&self, image: &str, symbol: &str) -> Result<(), ClientError> {
        let body = SaveRequest { image: image.to_owned(), symbol: symbol.to_owned() };
        self.send(Endpoint::Save, Some(&body)).await?;
        Ok(())
    }

    /// Retrain the model; returns the new version.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or a body
    /// without a `version` string.
    pub async fn retrain(&self) -> Result<String, ClientError> {
        let text = self.send::<()>(Endpoint::Retrain, None).await?;
        wire::decode_version(&text).map_err(|source| protocol_error(Endpoint::Retrain, source))
    }

    /// Current model version.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or a body
    /// without a `version` string.
    pub async fn version(&self) -> Result<String, ClientError> {
        let text = self.send::<()>(Endpoint::Version, None).await?;
        wire::decode_version(&text).map_err(|source| protocol_error(Endpoint::Version, source))
    }

    async fn send<B: Serialize>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<String, ClientError> {
        let url = endpoint.url(&self.base_url);
        let request = match endpoint.method() {
            wire::Method::Get => self.http.get(url),
            wire::Method::Post => self.http.post(url),
        };
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport { endpoint: endpoint.path(), source })?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|source| ClientError::Transport { endpoint: endpoint.path(), source })?;

        wire::check_status(status, &text).map_err(|source| protocol_error(endpoint, source))?;
        tracing::debug!(endpoint = endpoint.path(), status, "service call succeeded");
        Ok(text)
    }
}

fn protocol_error(endpoint: Endpoint, source: ProtocolError) -> ClientError {
    ClientError::Protocol { endpoint: endpoint.path(), source }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
