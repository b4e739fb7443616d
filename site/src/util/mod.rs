//! Browser and environment helpers shared by components.
//!
//! Each helper compiles natively as a no-op so state tests run without a DOM.

pub mod content;
pub mod dark_mode;
pub mod dom;
pub mod image_loader;
#[cfg(feature = "csr")]
pub mod observer;
