use super::*;

#[test]
fn footer_includes_year_and_owner() {
    assert_eq!(footer_text(Some(2026), "Eduardo Chavez"), "© 2026 Eduardo Chavez");
}

#[test]
fn footer_without_clock_shows_owner() {
    assert_eq!(footer_text(None, "Eduardo Chavez"), "© Eduardo Chavez");
}
