use super::*;

// =============================================================
// Login rejection messages
// =============================================================

#[test]
fn login_error_message_uses_server_error() {
    let body = serde_json::json!({"error": "bad password"});
    assert_eq!(login_error_message(&body), "bad password");
}

#[test]
fn login_error_message_falls_back_when_absent() {
    assert_eq!(login_error_message(&serde_json::json!({})), "Login failed");
    assert_eq!(login_error_message(&serde_json::Value::Null), "Login failed");
}

#[test]
fn login_error_message_ignores_non_string_error() {
    let body = serde_json::json!({"error": 42});
    assert_eq!(login_error_message(&body), "Login failed");
}

// =============================================================
// Registration error flattening
// =============================================================

#[test]
fn flatten_field_errors_aggregates_all_fields() {
    let body = serde_json::json!({
        "username": ["already taken"],
        "email": ["invalid"]
    });
    let message = flatten_field_errors(&body);
    assert!(message.contains("already taken"));
    assert!(message.contains("invalid"));
    assert!(message.contains(", "));
}

#[test]
fn flatten_field_errors_joins_multiple_messages_per_field() {
    let body = serde_json::json!({
        "password": ["too short", "too common"]
    });
    assert_eq!(flatten_field_errors(&body), "too short, too common");
}

#[test]
fn flatten_field_errors_accepts_bare_strings() {
    let body = serde_json::json!({"detail": "throttled"});
    assert_eq!(flatten_field_errors(&body), "throttled");
}

#[test]
fn flatten_field_errors_falls_back_when_empty() {
    assert_eq!(
        flatten_field_errors(&serde_json::json!({})),
        "Registration failed"
    );
    assert_eq!(
        flatten_field_errors(&serde_json::Value::Null),
        "Registration failed"
    );
}

// =============================================================
// Success body decoding
// =============================================================

#[test]
fn login_ok_decodes_token_and_user() {
    let body = serde_json::json!({
        "token": "t-abc",
        "user": {
            "id": 3,
            "username": "maya",
            "email": "maya@example.com",
            "first_name": "Maya",
            "last_name": "Lin",
            "user_type": "teacher"
        }
    });
    let ok: LoginOk = serde_json::from_value(body).expect("login body");
    assert_eq!(ok.token, "t-abc");
    assert_eq!(ok.user.username, "maya");
    assert_eq!(ok.user.role, Some(crate::net::types::Role::Teacher));
}
