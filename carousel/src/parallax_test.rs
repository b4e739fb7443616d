#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn centered_step_has_no_shift() {
    assert_eq!(step_shift(350.0, 100.0, 800.0, 1280.0), 0.0);
}

#[test]
fn shift_scales_with_distance() {
    // center 600, viewport center 400 → diff 200 → 10px
    assert!((step_shift(550.0, 100.0, 800.0, 1280.0) - 10.0).abs() < 1e-9);
    assert!((step_shift(150.0, 100.0, 800.0, 1280.0) + 10.0).abs() < 1e-9);
}

#[test]
fn shift_is_clamped() {
    assert_eq!(step_shift(5_000.0, 100.0, 800.0, 1280.0), 30.0);
    assert_eq!(step_shift(-5_000.0, 100.0, 800.0, 1280.0), -30.0);
}

#[test]
fn narrow_viewports_disable_parallax() {
    assert_eq!(step_shift(5_000.0, 100.0, 800.0, 768.0), 0.0);
}

#[test]
fn css_value_has_px_suffix() {
    assert_eq!(css_value(12.5), "12.5px");
    assert_eq!(css_value(0.0), "0px");
}
