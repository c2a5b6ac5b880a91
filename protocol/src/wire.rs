//! HTTP wire model for the classification service.
//!
//! Four endpoints, all JSON. Request bodies carry the bitmap as a bare base64
//! PNG string; response bodies are decoded here so the native and browser
//! clients agree on what counts as a usable reply.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Service address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// HTTP method of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// The service's routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /classify`: predict the symbol in an image.
    Classify,
    /// `POST /save`: add a labelled image to the training set.
    Save,
    /// `POST /retrain`: rebuild the model from the training set.
    Retrain,
    /// `GET /version`: current model version.
    Version,
}

impl Endpoint {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Version => Method::Get,
            Self::Classify | Self::Save | Self::Retrain => Method::Post,
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Classify => "/classify",
            Self::Save => "/save",
            Self::Retrain => "/retrain",
            Self::Version => "/version",
        }
    }

    /// Absolute URL of this endpoint under `base_url`.
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Normalize a configured base URL: trims whitespace and trailing slashes,
/// falling back to [`DEFAULT_BASE_URL`] when empty.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Body of `POST /classify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Bare base64 PNG.
    pub image: String,
}

/// Success body of `POST /classify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Predicted symbol label.
    pub result: String,
}

/// Body of `POST /save`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Bare base64 PNG.
    pub image: String,
    /// Confirmed or corrected label.
    pub symbol: String,
}

/// Success body of `POST /retrain` and `GET /version`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

/// Error body the service sends with 4xx/5xx replies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Map a response status to success or [`ProtocolError::Status`].
///
/// Any 2xx is success. Otherwise the service's `error` message, if the body
/// carries one, is kept for diagnostics.
///
/// # Errors
///
/// Returns [`ProtocolError::Status`] for non-2xx statuses.
pub fn check_status(status: u16, body: &str) -> Result<(), ProtocolError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let detail = serde_json::from_str::<ErrorBody>(body).map(|b| b.error).unwrap_or_default();
    Err(ProtocolError::Status { status, detail })
}

/// Decode a `/classify` success body into the predicted label.
///
/// # Errors
///
/// Returns [`ProtocolError::Decode`] if the body is not a `{"result": ...}` object.
pub fn decode_classify(body: &str) -> Result<String, ProtocolError> {
    let parsed: ClassifyResponse = serde_json::from_str(body)?;
    Ok(parsed.result)
}

/// Decode a `/retrain` or `/version` success body into the version string.
///
/// # Errors
///
/// Returns [`ProtocolError::Decode`] if the body is not a `{"version": ...}` object.
pub fn decode_version(body: &str) -> Result<String, ProtocolError> {
    let parsed: VersionResponse = serde_json::from_str(body)?;
    Ok(parsed.version)
}
