use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: 1,
        username: "maya".to_owned(),
        email: "maya@example.com".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
        role: None,
    }
}

#[test]
fn loading_session_is_checking() {
    let session = SessionState::default();
    assert_eq!(GuardDecision::from_session(&session), GuardDecision::Checking);
}

#[test]
fn loading_wins_even_with_identity_present() {
    // No redirect decision until the initial restore settles.
    let session = SessionState {
        user: Some(user()),
        token: Some("t-1".to_owned()),
        loading: true,
    };
    assert_eq!(GuardDecision::from_session(&session), GuardDecision::Checking);
}

#[test]
fn settled_authenticated_session_is_allowed() {
    let session = SessionState {
        user: Some(user()),
        token: Some("t-1".to_owned()),
        loading: false,
    };
    assert_eq!(GuardDecision::from_session(&session), GuardDecision::Allow);
}

#[test]
fn settled_empty_session_is_denied() {
    let session = SessionState {
        user: None,
        token: None,
        loading: false,
    };
    assert_eq!(GuardDecision::from_session(&session), GuardDecision::Deny);
}

#[test]
fn token_without_user_is_denied() {
    let session = SessionState {
        user: None,
        token: Some("t-1".to_owned()),
        loading: false,
    };
    assert_eq!(GuardDecision::from_session(&session), GuardDecision::Deny);
}
