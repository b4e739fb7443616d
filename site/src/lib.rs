//! # site
//!
//! Leptos + WASM frontend for the portfolio. Renders the page sections, the
//! project grid, and the gallery modal, and bridges browser events into the
//! `carousel` crate, which owns all navigation and image-fallback state.
//!
//! Browser glue is compiled only with the `csr` feature. Without it the crate
//! builds natively and the DOM helpers fall back to no-ops, so state and
//! utility tests run under plain `cargo test`.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
