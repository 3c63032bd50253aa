use super::*;

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
    assert_eq!(serde_json::to_string(&Role::Parent).unwrap(), "\"parent\"");
    assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
}

#[test]
fn user_decodes_with_role() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "username": "maya",
        "email": "maya@example.com",
        "first_name": "Maya",
        "last_name": "Lin",
        "user_type": "parent"
    }))
    .expect("user");
    assert_eq!(user.role, Some(Role::Parent));
}

#[test]
fn user_decodes_without_role_or_names() {
    // Older accounts may predate the role field entirely.
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 2,
        "username": "sam",
        "email": "sam@example.com"
    }))
    .expect("user");
    assert_eq!(user.role, None);
    assert!(user.first_name.is_empty());
}

#[test]
fn register_payload_uses_backend_field_names() {
    let payload = RegisterPayload {
        username: "maya".to_owned(),
        email: "maya@example.com".to_owned(),
        password: "pw".to_owned(),
        password2: "pw".to_owned(),
        first_name: "Maya".to_owned(),
        last_name: "Lin".to_owned(),
        role: Role::Teacher,
    };
    let value = serde_json::to_value(&payload).expect("payload");
    assert_eq!(value["user_type"], "teacher");
    assert_eq!(value["password2"], "pw");
    assert!(value.get("role").is_none());
}
