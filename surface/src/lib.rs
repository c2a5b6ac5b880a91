//! Stroke capture surface for the symbol pad.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and is also
//! used natively by the command-line client. It owns the drawing surface: a
//! fixed-resolution bitmap, the display-to-logical coordinate transform, pen
//! rasterization, and the PNG/base64 export sent to the classification
//! service. The host layer only forwards pointer events and decides when to
//! submit.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser [`engine::Surface`] and testable [`engine::SurfaceCore`] |
//! | [`bitmap`] | RGBA pixel store |
//! | [`geometry`] | Points, display rects, and the scale mapping |
//! | [`input`] | Mouse buttons and the stroke state machine |
//! | [`raster`] | Square-capped segment rasterization |
//! | [`encode`] | PNG and base64 export |
//! | [`consts`] | Logical size, pen width, colours |

pub mod bitmap;
pub mod consts;
pub mod encode;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod raster;
