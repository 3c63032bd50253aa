//! Dashboard pages behind the route guard.
//!
//! These are deliberately thin shells: a greeting plus logout. Widget
//! content (learning paths, quizzes, progress) lives in its own feature
//! work and is not part of the session gate.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Default (student) dashboard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <DashboardShell title="Dashboard"/> }
}

/// Parent dashboard.
#[component]
pub fn ParentDashboardPage() -> impl IntoView {
    view! { <DashboardShell title="Parent Dashboard"/> }
}

/// Teacher dashboard.
#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    view! { <DashboardShell title="Teacher Dashboard"/> }
}

/// Shared header: title, greeting from the session user, logout button.
#[component]
fn DashboardShell(title: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let greeting = move || {
        session.get().user.map_or_else(String::new, |u| {
            if u.first_name.is_empty() {
                u.username
            } else {
                u.first_name
            }
        })
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::session::logout(session, toasts, move |path| {
                    navigate(path, leptos_router::NavigateOptions::default());
                })
                .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &toasts);
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{title}</h1>
                <span class="dashboard-page__greeting">{move || format!("Hi, {}", greeting())}</span>
                <button class="btn dashboard-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
        </div>
    }
}
