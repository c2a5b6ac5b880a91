//! Client-side state beyond the shared `protocol::PadState`.
//!
//! DESIGN
//! ======
//! `PadState` covers the request lifecycle and everything the controls
//! render. The modules here hold what only the browser needs: build-time
//! configuration and the hand-off between the canvas host and the controls.

pub mod config;
pub mod drawing;
