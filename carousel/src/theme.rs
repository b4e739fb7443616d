//! Dark-mode preference resolution.
//!
//! Storage and the `<html>` class are browser concerns handled in the site
//! crate; this module only decides the value.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Class applied to `<html>` while dark mode is on.
pub const DARK_CLASS: &str = "dark-mode";

/// Combine the stored flag with the system color-scheme signal.
///
/// A stored `"true"` wins; any other stored value means light. Nothing stored
/// (or an empty string) defers to the system preference.
#[must_use]
pub fn resolve_preference(stored: Option<&str>, system_prefers_dark: bool) -> bool {
    match stored {
        Some(value) if !value.is_empty() => value == "true",
        _ => system_prefers_dark,
    }
}

/// Value persisted for `enabled`.
#[must_use]
pub fn encode(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}
