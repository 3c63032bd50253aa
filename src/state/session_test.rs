use super::*;
use crate::net::types::{Role, User};

fn user(role: Option<Role>) -> User {
    User {
        id: 7,
        username: "maya".to_owned(),
        email: "maya@example.com".to_owned(),
        first_name: "Maya".to_owned(),
        last_name: "Lin".to_owned(),
        role,
    }
}

// =============================================================
// SessionState defaults and invariants
// =============================================================

#[test]
fn default_starts_loading_with_no_identity() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn token_alone_is_not_authenticated() {
    // Restore sets the token before validation succeeds; the guard must not
    // treat that as logged in.
    let state = SessionState {
        token: Some("t-123".to_owned()),
        loading: false,
        ..SessionState::default()
    };
    assert!(!state.is_authenticated());
}

#[test]
fn user_alone_is_not_authenticated() {
    let state = SessionState {
        user: Some(user(None)),
        token: None,
        loading: false,
    };
    assert!(!state.is_authenticated());
}

#[test]
fn apply_login_authenticates() {
    let mut state = SessionState::default();
    state.apply_login("t-123".to_owned(), user(Some(Role::Student)));
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("t-123"));
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_user_and_token() {
    let mut state = SessionState::default();
    state.apply_login("t-123".to_owned(), user(None));
    state.clear();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn clear_is_idempotent() {
    let mut once = SessionState::default();
    once.apply_login("t-123".to_owned(), user(None));
    once.clear();

    let mut twice = once.clone();
    twice.clear();
    assert_eq!(once, twice);
}

// =============================================================
// Role-based redirect dispatch
// =============================================================

#[test]
fn parent_lands_on_parent_dashboard() {
    assert_eq!(dashboard_route_for(Some(Role::Parent)), "/parent");
}

#[test]
fn teacher_lands_on_teacher_dashboard() {
    assert_eq!(dashboard_route_for(Some(Role::Teacher)), "/teacher");
}

#[test]
fn student_lands_on_default_dashboard() {
    assert_eq!(dashboard_route_for(Some(Role::Student)), "/dashboard");
}

#[test]
fn missing_role_lands_on_default_dashboard() {
    assert_eq!(dashboard_route_for(None), "/dashboard");
}
