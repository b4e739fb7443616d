//! Portfolio gallery core: catalog data, the modal carousel state machine,
//! and the small pure state machines behind the page's ambient behaviors.
//!
//! This crate has no browser dependencies. The `site` crate owns the DOM and
//! translates raw browser events into calls on these types, then applies the
//! returned [`controller::Effect`]s. Everything here runs under plain
//! `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Project and slide records, gallery registry lookups |
//! | [`config`] | JSON site configuration and validation |
//! | [`controller`] | Carousel state machine and [`controller::CarouselController`] |
//! | [`loader`] | Staged image fallback chain and load requests |
//! | [`input`] | Key and swipe mapping into carousel commands |
//! | [`nav`] | Mobile menu and section scroll-spy state |
//! | [`cursor`] | Custom cursor visibility/position state |
//! | [`parallax`] | Workflow step parallax offset math |
//! | [`theme`] | Dark-mode preference resolution |
//! | [`consts`] | Shared thresholds and fixed values |
//! | [`error`] | Error taxonomy |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod input;
pub mod loader;
pub mod nav;
pub mod parallax;
pub mod theme;

pub use catalog::{Catalog, ProjectRecord, SlideRecord};
pub use config::{ConfigError, SiteConfig};
pub use controller::{CarouselController, CarouselState, Effect};
pub use error::CarouselError;
pub use input::Command;
