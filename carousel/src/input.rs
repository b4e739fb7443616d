//! Input mapping: keyboard keys and touch swipes into carousel commands.
//!
//! Dots, arrow buttons, and the close button construct a [`Command`]
//! directly; keys go through [`command_for_key`] and touches through
//! [`SwipeTracker`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{SWIPE_MAX_DY_PX, SWIPE_MIN_DX_PX};

/// A navigation intent understood by the carousel controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Close,
    Previous,
    Next,
    /// Absolute slide index (dot indicator).
    GoTo(usize),
    ToggleZoom,
}

/// Map a `KeyboardEvent.key` value to a command.
#[must_use]
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "Escape" => Some(Command::Close),
        "ArrowLeft" => Some(Command::Previous),
        "ArrowRight" => Some(Command::Next),
        "Enter" => Some(Command::ToggleZoom),
        _ => None,
    }
}

/// Classify a finished touch gesture by its displacement.
///
/// Only a mostly horizontal drag counts: `|dx|` must exceed the swipe
/// distance while `|dy|` stays under the scroll threshold. Dragging left
/// advances.
#[must_use]
pub fn classify_swipe(dx: f64, dy: f64) -> Option<Command> {
    if dx.abs() > SWIPE_MIN_DX_PX && dy.abs() < SWIPE_MAX_DY_PX {
        if dx < 0.0 { Some(Command::Next) } else { Some(Command::Previous) }
    } else {
        None
    }
}

/// Tracks a single-finger touch from start to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
    end: (f64, f64),
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the touch origin. The end point starts at the origin so a tap
    /// without movement classifies as no swipe.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
        self.end = (x, y);
    }

    /// Record the latest touch position. Ignored when no touch is active.
    pub fn track(&mut self, x: f64, y: f64) {
        if self.start.is_some() {
            self.end = (x, y);
        }
    }

    /// Finish the gesture and return the command it maps to, if any.
    pub fn finish(&mut self) -> Option<Command> {
        let (sx, sy) = self.start.take()?;
        let (ex, ey) = self.end;
        classify_swipe(ex - sx, ey - sy)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}
