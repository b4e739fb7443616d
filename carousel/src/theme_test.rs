use super::*;

#[test]
fn stored_true_wins_over_light_system() {
    assert!(resolve_preference(Some("true"), false));
}

#[test]
fn stored_false_wins_over_dark_system() {
    assert!(!resolve_preference(Some("false"), true));
}

#[test]
fn missing_value_defers_to_system() {
    assert!(resolve_preference(None, true));
    assert!(!resolve_preference(None, false));
}

#[test]
fn empty_value_defers_to_system() {
    assert!(resolve_preference(Some(""), true));
}

#[test]
fn encode_round_trips_through_resolve() {
    assert!(resolve_preference(Some(encode(true)), false));
    assert!(!resolve_preference(Some(encode(false)), true));
}
