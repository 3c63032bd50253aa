//! Route guard gating protected pages on session state.
//!
//! Rendered as a parent route around every protected page. The guard holds
//! no state of its own: it re-evaluates whenever the session signal changes,
//! so a token invalidated mid-session redirects even from a mounted page.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{Outlet, Redirect};

use crate::state::session::SessionState;

/// Three-way gate decision derived from the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Initial restore still in flight; show a placeholder, decide nothing.
    Checking,
    /// Authenticated; render the nested page.
    Allow,
    /// Settled and unauthenticated; redirect to login.
    Deny,
}

impl GuardDecision {
    pub fn from_session(session: &SessionState) -> Self {
        if session.loading {
            Self::Checking
        } else if session.is_authenticated() {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

/// Gate for protected routes.
///
/// Shows a spinner while the initial session check is in flight, redirects
/// to `/login` (replacing the history entry, so back-navigation does not
/// return here) when unauthenticated, and otherwise delegates to the
/// requested nested page via `Outlet`.
#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || match GuardDecision::from_session(&session.get()) {
        GuardDecision::Checking => view! {
            <div class="route-guard__checking">
                <div class="route-guard__spinner" aria-busy="true"></div>
            </div>
        }
        .into_any(),
        GuardDecision::Deny => {
            let options = NavigateOptions {
                replace: true,
                ..Default::default()
            };
            view! { <Redirect path="/login" options=options/> }.into_any()
        }
        GuardDecision::Allow => view! { <Outlet/> }.into_any(),
    }
}
