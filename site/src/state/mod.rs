//! Shared reactive state provided through Leptos context.

pub mod gallery;
pub mod ui;
