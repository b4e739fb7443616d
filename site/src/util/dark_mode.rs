//! Dark mode persistence and the `<html>` class.
//!
//! The stored flag lives in `localStorage` under the configured key. An
//! absent or empty value defers to `(prefers-color-scheme: dark)`; the choice
//! itself is made by [`carousel::theme::resolve_preference`].

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use carousel::theme;

/// Read the stored preference, falling back to the system color scheme.
pub fn read_preference(storage_key: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(storage_key).ok().flatten());
        theme::resolve_preference(stored.as_deref(), super::dom::media_matches("(prefers-color-scheme: dark)"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = storage_key;
        theme::resolve_preference(None, false)
    }
}

/// Set or clear the dark-mode class on `<html>`.
pub fn apply(enabled: bool) {
    super::dom::set_root_class(theme::DARK_CLASS, enabled);
}

/// Flip dark mode, apply it, and persist the new value.
pub fn toggle(current: bool, storage_key: &str) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(err) = storage.set_item(storage_key, theme::encode(next)) {
                log::warn!("[theme] failed to persist preference: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = storage_key;
    }
    next
}
