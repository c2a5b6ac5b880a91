//! Shared service protocol and pad state for the native and browser clients.
//!
//! This crate owns the JSON wire model of the classification service, the
//! request lifecycle every call goes through, and the controller state the
//! UI renders from. It has no transport of its own: the native client sends
//! requests with `reqwest`, the browser client with `gloo-net`, and both
//! decode replies and apply outcomes through the functions here.

pub mod pad;
pub mod request;
pub mod symbols;
pub mod wire;

pub use pad::{Notice, NoticeKind, PadState};
pub use request::{Operation, RequestState, TransitionError};

/// Error returned when a service reply is unusable.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The service answered with a non-2xx status.
    #[error("service returned status {status}: {detail}")]
    Status { status: u16, detail: String },
    /// The body of a 2xx reply did not have the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
