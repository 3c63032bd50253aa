use super::*;

#[test]
fn push_records_level_and_message() {
    let mut state = ToastState::default();
    state.push_success("Login successful!");
    state.push_error("bad password");

    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].level, ToastLevel::Success);
    assert_eq!(state.items[0].message, "Login successful!");
    assert_eq!(state.items[1].level, ToastLevel::Error);
    assert_eq!(state.items[1].message, "bad password");
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut state = ToastState::default();
    state.push_success("a");
    state.push_success("b");
    assert!(state.items[0].id < state.items[1].id);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    state.push_success("a");
    state.push_error("b");
    let first_id = state.items[0].id;

    state.dismiss(first_id);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "b");

    // Unknown ids are a no-op.
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}
