//! Custom cursor state for fine-pointer devices.
//!
//! The host draws the cursor element from this state. Position writes are
//! coalesced: [`CursorState::pointer_moved`] asks for a frame only when none
//! is pending, and [`CursorState::take_frame`] hands back the latest position.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// `PointerEvent.pointerType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Parse a DOM pointer type. An empty string means the browser did not say.
    #[must_use]
    pub fn from_dom(raw: &str) -> Option<Self> {
        match raw {
            "mouse" => Some(Self::Mouse),
            "pen" => Some(Self::Pen),
            "touch" => Some(Self::Touch),
            _ => None,
        }
    }
}

/// Unknown pointer types are treated as a mouse.
fn is_mouse(kind: Option<PointerKind>) -> bool {
    matches!(kind, None | Some(PointerKind::Mouse))
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorState {
    /// Set on the first mouse movement; the native cursor is hidden from then on.
    pub enabled: bool,
    pub visible: bool,
    pub over_image: bool,
    pub x: f64,
    pub y: f64,
    frame_pending: bool,
}

impl CursorState {
    /// Record a pointer move. Returns `true` when the host should schedule a
    /// frame to paint the new position.
    pub fn pointer_moved(&mut self, kind: Option<PointerKind>, x: f64, y: f64) -> bool {
        if !is_mouse(kind) {
            return false;
        }
        self.enabled = true;
        self.visible = true;
        self.x = x;
        self.y = y;
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Consume the pending frame and return the position to paint.
    pub fn take_frame(&mut self) -> (f64, f64) {
        self.frame_pending = false;
        (self.x, self.y)
    }

    /// Pointer entered or left an image the cursor decorates.
    pub fn set_over_image(&mut self, kind: Option<PointerKind>, over: bool) {
        if over && !is_mouse(kind) {
            return;
        }
        if over {
            self.enabled = true;
        }
        self.over_image = over;
    }

    /// Window blur, mouse leaving the window, or the tab becoming hidden.
    pub fn hide(&mut self) {
        self.visible = false;
        self.over_image = false;
    }
}
