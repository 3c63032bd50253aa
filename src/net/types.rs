//! Wire types shared with the auth service.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role, used only to pick a post-login destination. The backend
/// calls this field `user_type`; absent or unrecognized roles fall back to
/// the default dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Parent,
    Teacher,
}

/// The authenticated user record returned by `/api/auth/user/` and embedded
/// in the login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, rename = "user_type")]
    pub role: Option<Role>,
}

/// Registration form payload for `/api/auth/register/`.
///
/// `password2` is the confirmation field; the server validates the match.
/// Registration never authenticates by itself, the user logs in afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "user_type")]
    pub role: Role,
}
