//! Session store: the single source of truth for "who is logged in".
//!
//! The `SessionState` signal is provided via context from `App` and observed
//! by the route guard and every page that reads `user`. All auth service
//! calls and all persisted-token reads/writes happen here; consumers never
//! mutate session state directly.
//!
//! LIFECYCLE
//! =========
//! `loading` starts `true` and flips to `false` exactly once when `restore`
//! settles; until then no guard decision is made. `login` and `register`
//! raise it only for the duration of their own network call and clear it on
//! every exit path.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{self, LoginResponse, RegisterResponse};
use crate::net::types::{RegisterPayload, Role, User};
use crate::state::toast::ToastState;
use crate::util::storage;

/// Current session: user identity, opaque token, and the in-flight flag.
///
/// A non-empty token alone is not "authenticated" — the user record must
/// also be populated (the token may still fail validation during restore).
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// True only when both the user record and the token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Adopt a freshly issued credential and identity.
    pub fn apply_login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop identity and credential. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }
}

/// Post-login destination for a role. Unknown or absent roles land on the
/// default dashboard.
pub fn dashboard_route_for(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Parent) => "/parent",
        Some(Role::Teacher) => "/teacher",
        Some(Role::Student) | None => "/dashboard",
    }
}

/// Restore-and-validate the persisted token at application start.
///
/// No persisted token: settle immediately without touching the network.
/// Otherwise validate it against `/api/auth/user/`; a rejected or failed
/// validation clears both the persisted and in-memory token. Either way
/// `loading` flips to `false` exactly once at the end.
pub async fn restore(session: RwSignal<SessionState>) {
    if let Some(token) = storage::read_token() {
        session.update(|s| s.token = Some(token.clone()));
        match api::fetch_current_user(&token).await {
            Some(user) => session.update(|s| s.user = Some(user)),
            None => {
                storage::clear_token();
                session.update(|s| s.token = None);
            }
        }
    }
    session.update(|s| s.loading = false);
}

/// Attempt a login and, on success, navigate to the role's dashboard.
///
/// Rejections surface the server's message as an error toast; transport
/// failures surface a generic one. The session stays unauthenticated on any
/// failure and `loading` clears unconditionally at the end.
pub async fn login(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    navigate: impl Fn(&str),
    username: String,
    password: String,
) {
    session.update(|s| s.loading = true);
    match api::login(&username, &password).await {
        LoginResponse::Success { token, user } => {
            storage::write_token(&token);
            let destination = dashboard_route_for(user.role);
            session.update(|s| s.apply_login(token, user));
            toasts.update(|t| t.push_success("Login successful!"));
            navigate(destination);
        }
        LoginResponse::Rejected { message } => {
            toasts.update(|t| t.push_error(&message));
        }
        LoginResponse::TransportError => {
            toasts.update(|t| t.push_error("An error occurred during login"));
        }
    }
    session.update(|s| s.loading = false);
}

/// Submit a registration and, on success, navigate to the login page.
///
/// Registration never authenticates: the server issues no token here and
/// the user logs in as a separate step. Validation failures arrive as a
/// `{field: [messages...]}` map already flattened by the API layer.
pub async fn register(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    navigate: impl Fn(&str),
    payload: RegisterPayload,
) {
    session.update(|s| s.loading = true);
    match api::register(&payload).await {
        RegisterResponse::Success => {
            toasts.update(|t| t.push_success("Registration successful! Please log in."));
            navigate("/login");
        }
        RegisterResponse::Rejected { message } => {
            toasts.update(|t| t.push_error(&message));
        }
        RegisterResponse::TransportError => {
            toasts.update(|t| t.push_error("An error occurred during registration"));
        }
    }
    session.update(|s| s.loading = false);
}

/// Log out: best-effort server notification, then unconditional local clear.
///
/// The remote call failing is logged and ignored — from the user's point of
/// view logout always succeeds. Idempotent: with no token held, it just
/// clears and navigates again.
pub async fn logout(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    navigate: impl Fn(&str),
) {
    if let Some(token) = session.get_untracked().token {
        if let Err(e) = api::logout(&token).await {
            leptos::logging::warn!("logout notification failed: {e}");
        }
    }
    storage::clear_token();
    session.update(SessionState::clear);
    toasts.update(|t| t.push_success("Logged out successfully"));
    navigate("/login");
}
