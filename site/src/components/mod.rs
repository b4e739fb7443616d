//! Page components.
//!
//! Components read shared state from Leptos context (`Arc<SiteConfig>`,
//! `Gallery`, `RwSignal<UiState>`) and keep browser wiring behind the `csr`
//! feature.

pub mod carousel_modal;
pub mod custom_cursor;
pub mod footer;
pub mod header;
pub mod hero;
pub mod project_card;
pub mod project_grid;
pub mod reveal;
pub mod section_nav;
pub mod sections;
