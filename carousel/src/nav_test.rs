use super::*;

// =============================================================
// NavMenu
// =============================================================

#[test]
fn menu_starts_closed() {
    let menu = NavMenu::default();
    assert!(!menu.is_open());
    assert_eq!(menu.aria_expanded(), "false");
    assert_eq!(menu.aria_label(), "Open menu");
}

#[test]
fn toggle_flips_and_updates_aria() {
    let mut menu = NavMenu::default();
    assert!(menu.toggle());
    assert_eq!(menu.aria_expanded(), "true");
    assert_eq!(menu.aria_label(), "Close menu");
    assert!(!menu.toggle());
}

#[test]
fn open_and_close_report_changes_only() {
    let mut menu = NavMenu::default();
    assert!(!menu.close());
    assert!(menu.open());
    assert!(!menu.open());
    assert!(menu.close());
}

#[test]
fn resize_to_desktop_closes() {
    let mut menu = NavMenu::default();
    menu.open();
    assert!(!menu.on_resize(768.0));
    assert!(menu.is_open());
    assert!(menu.on_resize(1024.0));
    assert!(!menu.is_open());
}

#[test]
fn newer_flash_outlives_older_timer() {
    let mut menu = NavMenu::default();
    let first = menu.begin_flash();
    let second = menu.begin_flash();
    assert!(!menu.end_flash(first));
    assert!(menu.is_flashing());
    assert!(menu.end_flash(second));
    assert!(!menu.is_flashing());
}

// =============================================================
// SectionSpy
// =============================================================

#[test]
fn spy_tracks_visible_section() {
    let mut spy = SectionSpy::new(["home", "samples", "contact"]);
    assert_eq!(spy.active_id(), None);
    assert!(spy.on_visible("samples"));
    assert!(spy.is_active("samples"));
    assert!(!spy.is_active("home"));
    assert!(!spy.on_visible("samples"));
}

#[test]
fn spy_ignores_unknown_sections() {
    let mut spy = SectionSpy::new(["home"]);
    spy.on_visible("home");
    assert!(!spy.on_visible("footer"));
    assert_eq!(spy.active_id(), Some("home"));
}
