use super::*;

#[test]
fn ui_state_default_is_light_with_closed_menu() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.menu.is_open());
    assert!(state.sections.sections().is_empty());
}

#[test]
fn ui_state_new_registers_sections_in_order() {
    let state = UiState::new(true, ["home", "samples", "contact"]);
    assert!(state.dark_mode);
    assert_eq!(state.sections.sections(), ["home", "samples", "contact"]);
    assert_eq!(state.sections.active_id(), None);
}

#[test]
fn menu_and_spy_update_independently() {
    let mut state = UiState::new(false, ["home", "samples"]);
    assert!(state.menu.toggle());
    assert!(state.sections.on_visible("samples"));
    assert!(state.menu.is_open());
    assert!(state.sections.is_active("samples"));
}
