//! REST API helpers for communicating with the auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/transport-error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get plain data enums (`LoginResponse`, `RegisterResponse`) instead
//! of panics or raw HTTP errors, so the session store branches on outcomes
//! without ever crashing the UI. Server rejection bodies are reduced to
//! user-readable messages here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use super::types::{RegisterPayload, User};

/// Fallback shown when a login rejection carries no server message.
const LOGIN_FAILED: &str = "Login failed";

/// Fallback shown when a registration rejection carries no field errors.
const REGISTRATION_FAILED: &str = "Registration failed";

/// Successful login body: an opaque token plus the user record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginOk {
    pub token: String,
    pub user: User,
}

/// Outcome of a login attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginResponse {
    /// Credentials accepted; token and user returned.
    Success { token: String, user: User },
    /// Credentials rejected; `message` is ready for display.
    Rejected { message: String },
    /// Request never produced a usable response.
    TransportError,
}

/// Outcome of a registration attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum RegisterResponse {
    /// Account created; the user still has to log in.
    Success,
    /// Validation rejected; `message` aggregates all field errors.
    Rejected { message: String },
    /// Request never produced a usable response.
    TransportError,
}

/// Extract the display message from a login rejection body (`{error: ...}`),
/// falling back to a generic message when absent.
pub fn login_error_message(body: &serde_json::Value) -> String {
    body.get("error")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| LOGIN_FAILED.to_owned(), str::to_owned)
}

/// Flatten a registration rejection body (`{field: [messages...]}`) into one
/// comma-joined message covering every field, falling back to a generic
/// message when the body carries nothing usable.
pub fn flatten_field_errors(body: &serde_json::Value) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(map) = body.as_object() {
        for messages in map.values() {
            match messages {
                serde_json::Value::Array(items) => {
                    parts.extend(items.iter().filter_map(|v| v.as_str().map(str::to_owned)));
                }
                serde_json::Value::String(s) => parts.push(s.clone()),
                _ => {}
            }
        }
    }
    if parts.is_empty() {
        REGISTRATION_FAILED.to_owned()
    } else {
        parts.join(", ")
    }
}

/// Fetch the current user from `GET /api/auth/user/` with a bearer token.
/// Returns `None` if the token is rejected, the request fails, or on the
/// server — callers treat all of those as "token invalid".
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/user/")
            .header("Authorization", &format!("Token {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Submit credentials to `POST /api/auth/login/`.
pub async fn login(username: &str, password: &str) -> LoginResponse {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "username": username, "password": password });
        let Ok(req) = gloo_net::http::Request::post("/api/auth/login/").json(&body) else {
            return LoginResponse::TransportError;
        };
        let Ok(resp) = req.send().await else {
            return LoginResponse::TransportError;
        };
        if resp.ok() {
            match resp.json::<LoginOk>().await {
                Ok(ok) => LoginResponse::Success {
                    token: ok.token,
                    user: ok.user,
                },
                Err(_) => LoginResponse::TransportError,
            }
        } else {
            let body = resp
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            LoginResponse::Rejected {
                message: login_error_message(&body),
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        LoginResponse::TransportError
    }
}

/// Submit a registration payload to `POST /api/auth/register/`.
pub async fn register(payload: &RegisterPayload) -> RegisterResponse {
    #[cfg(feature = "hydrate")]
    {
        let Ok(req) = gloo_net::http::Request::post("/api/auth/register/").json(payload) else {
            return RegisterResponse::TransportError;
        };
        let Ok(resp) = req.send().await else {
            return RegisterResponse::TransportError;
        };
        if resp.ok() {
            RegisterResponse::Success
        } else {
            let body = resp
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            RegisterResponse::Rejected {
                message: flatten_field_errors(&body),
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        RegisterResponse::TransportError
    }
}

/// Notify the server of a logout via `POST /api/auth/logout/`.
///
/// # Errors
///
/// Returns an error string when the request fails or the server rejects it.
/// Callers log and ignore this — logout always succeeds locally.
pub async fn logout(token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout/")
            .header("Authorization", &format!("Token {token}"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("logout request failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Ok(())
    }
}
