//! Header navigation state: the mobile menu and the section dot-nav.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::DESKTOP_MIN_WIDTH_PX;

/// Open/closed state of the collapsible mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    flash_seq: u64,
    flashing: bool,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns `true` if the state changed.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Returns `true` if the state changed.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    /// Close when the viewport grows to desktop width.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        if viewport_width > DESKTOP_MIN_WIDTH_PX { self.close() } else { false }
    }

    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    #[must_use]
    pub fn aria_label(&self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }

    // --- Toggle flash (touch devices) ---

    /// Light the toggle. Returns a token to pass to [`Self::end_flash`] when
    /// the flash timer fires; a newer flash invalidates older tokens.
    pub fn begin_flash(&mut self) -> u64 {
        self.flash_seq = self.flash_seq.wrapping_add(1);
        self.flashing = true;
        self.flash_seq
    }

    /// Clear the flash if `token` is from the most recent [`Self::begin_flash`].
    pub fn end_flash(&mut self, token: u64) -> bool {
        if token == self.flash_seq && self.flashing {
            self.flashing = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.flashing
    }
}

/// Tracks which page section the dot-nav highlights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSpy {
    sections: Vec<String>,
    active: Option<usize>,
}

impl SectionSpy {
    #[must_use]
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { sections: sections.into_iter().map(Into::into).collect(), active: None }
    }

    /// Mark `id` as the visible section. Unknown ids are ignored.
    pub fn on_visible(&mut self, id: &str) -> bool {
        let Some(pos) = self.sections.iter().position(|s| s == id) else {
            return false;
        };
        let changed = self.active != Some(pos);
        self.active = Some(pos);
        changed
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active.and_then(|i| self.sections.get(i)).map(String::as_str)
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }
}
