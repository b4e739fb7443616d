#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn pointer_kind_parsing() {
    assert_eq!(PointerKind::from_dom("mouse"), Some(PointerKind::Mouse));
    assert_eq!(PointerKind::from_dom("touch"), Some(PointerKind::Touch));
    assert_eq!(PointerKind::from_dom(""), None);
}

#[test]
fn first_mouse_move_enables_and_shows() {
    let mut cursor = CursorState::default();
    assert!(!cursor.enabled);
    assert!(cursor.pointer_moved(Some(PointerKind::Mouse), 10.0, 20.0));
    assert!(cursor.enabled);
    assert!(cursor.visible);
}

#[test]
fn touch_moves_are_ignored() {
    let mut cursor = CursorState::default();
    assert!(!cursor.pointer_moved(Some(PointerKind::Touch), 10.0, 20.0));
    assert!(!cursor.enabled);
}

#[test]
fn moves_coalesce_until_frame_taken() {
    let mut cursor = CursorState::default();
    assert!(cursor.pointer_moved(None, 1.0, 1.0));
    assert!(!cursor.pointer_moved(None, 2.0, 3.0));
    assert_eq!(cursor.take_frame(), (2.0, 3.0));
    assert!(cursor.pointer_moved(None, 4.0, 4.0));
}

#[test]
fn image_hover_and_hide() {
    let mut cursor = CursorState::default();
    cursor.pointer_moved(None, 0.0, 0.0);
    cursor.set_over_image(Some(PointerKind::Mouse), true);
    assert!(cursor.over_image);
    cursor.hide();
    assert!(!cursor.visible);
    assert!(!cursor.over_image);
}

#[test]
fn pen_hover_does_not_decorate() {
    let mut cursor = CursorState::default();
    cursor.set_over_image(Some(PointerKind::Pen), true);
    assert!(!cursor.over_image);
}
