//! Vertical parallax offset for the workflow step numbers.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::consts::{DESKTOP_MIN_WIDTH_PX, PARALLAX_FACTOR, PARALLAX_MAX_SHIFT_PX};

/// Shift, in pixels, for a step whose bounding box starts at `step_top` with
/// height `step_height`. Positive when the step sits below viewport center.
/// Disabled (zero) on narrow viewports.
#[must_use]
pub fn step_shift(step_top: f64, step_height: f64, viewport_height: f64, viewport_width: f64) -> f64 {
    if viewport_width <= DESKTOP_MIN_WIDTH_PX {
        return 0.0;
    }
    let step_center = step_top + step_height / 2.0;
    let diff = step_center - viewport_height / 2.0;
    (diff * PARALLAX_FACTOR).clamp(-PARALLAX_MAX_SHIFT_PX, PARALLAX_MAX_SHIFT_PX)
}

/// CSS value for the `--parallaxY` custom property.
#[must_use]
pub fn css_value(shift: f64) -> String {
    format!("{shift}px")
}
