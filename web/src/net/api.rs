//! Classification service calls from the browser.
//!
//! In the browser (`csr`): real HTTP calls via `gloo-net`. Elsewhere the
//! functions return an error, so native builds of the crate (and its tests)
//! never touch the network.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>`; the string is for the console
//! log only. Callers hand the result to `PadState`, which shows the
//! operation's fixed user-facing message on failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use protocol::ProtocolError;
#[cfg(feature = "csr")]
use protocol::wire::{ClassifyRequest, Endpoint, SaveRequest};

#[cfg(any(test, feature = "csr"))]
fn read_reply<T>(status: u16, body: &str, decode: fn(&str) -> Result<T, ProtocolError>) -> Result<T, String> {
    protocol::wire::check_status(status, body).map_err(|e| e.to_string())?;
    decode(body).map_err(|e| e.to_string())
}

#[cfg(any(test, feature = "csr"))]
#[allow(clippy::unnecessary_wraps)]
fn ignore_body(_body: &str) -> Result<(), ProtocolError> {
    Ok(())
}

#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::Request) -> Result<(u16, String), String> {
    let resp = request.send().await.map_err(|e| e.to_string())?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| e.to_string())?;
    Ok((status, body))
}

#[cfg(not(feature = "csr"))]
fn unavailable<T>() -> Result<T, String> {
    Err("service calls are only available in the browser".to_owned())
}

/// `POST /classify`: the predicted label for a bare base64 PNG.
///
/// # Errors
///
/// Returns an error string on network failure, non-2xx status, or a body
/// without a `result` field.
pub async fn classify(base_url: &str, image: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let body = ClassifyRequest { image: image.to_owned() };
        let request = gloo_net::http::Request::post(&Endpoint::Classify.url(base_url))
            .json(&body)
            .map_err(|e| e.to_string())?;
        let (status, text) = send(request).await?;
        read_reply(status, &text, protocol::wire::decode_classify)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base_url, image);
        unavailable()
    }
}

/// `POST /save`: store the image under `symbol`.
///
/// # Errors
///
/// Returns an error string on network failure or non-2xx status.
pub async fn save(base_url: &str, image: &str, symbol: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let body = SaveRequest { image: image.to_owned(), symbol: symbol.to_owned() };
        let request = gloo_net::http::Request::post(&Endpoint::Save.url(base_url))
            .json(&body)
            .map_err(|e| e.to_string())?;
        let (status, text) = send(request).await?;
        read_reply(status, &text, ignore_body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base_url, image, symbol);
        unavailable()
    }
}

/// `POST /retrain`: rebuild the model and return its new version.
///
/// # Errors
///
/// Returns an error string on network failure, non-2xx status, or a body
/// without a `version` field.
pub async fn retrain(base_url: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(&Endpoint::Retrain.url(base_url))
            .build()
            .map_err(|e| e.to_string())?;
        let (status, text) = send(request).await?;
        read_reply(status, &text, protocol::wire::decode_version)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = base_url;
        unavailable()
    }
}

/// `GET /version`: the current model version.
///
/// # Errors
///
/// Returns an error string on network failure, non-2xx status, or a body
/// without a `version` field.
pub async fn fetch_version(base_url: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(&Endpoint::Version.url(base_url))
            .build()
            .map_err(|e| e.to_string())?;
        let (status, text) = send(request).await?;
        read_reply(status, &text, protocol::wire::decode_version)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = base_url;
        unavailable()
    }
}
