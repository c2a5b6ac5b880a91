//! # web
//!
//! Leptos + WASM front end for the symbol pad.
//!
//! The page is one drawing surface with Proceed / Clear / Help controls, the
//! predicted label, an optional correction panel, and a help overlay. Pixels
//! live in the `surface` crate, mounted by the `PadCanvas` bridge component;
//! everything else the page shows is `protocol::PadState` held in an
//! `RwSignal` context.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// WASM entry point: install the panic hook and logger, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
