//! Page chrome state: theme, mobile menu, and section spy.
//!
//! The custom cursor keeps its own signal since it changes on every pointer
//! move.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use carousel::nav::{NavMenu, SectionSpy};

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu: NavMenu,
    pub sections: SectionSpy,
}

impl UiState {
    pub fn new<I, S>(dark_mode: bool, section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { dark_mode, sections: SectionSpy::new(section_ids), ..Self::default() }
    }
}
