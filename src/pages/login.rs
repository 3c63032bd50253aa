//! Login page with username/password form.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Login form. Submit is ignored while a session operation is in flight;
/// the session store handles the outcome (toast + role-based redirect).
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let loading = move || session.get().loading;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get_untracked().loading {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let username = username.get_untracked();
            let password = password.get_untracked();
            leptos::task::spawn_local(async move {
                crate::state::session::login(
                    session,
                    toasts,
                    move |path| navigate(path, leptos_router::NavigateOptions::default()),
                    username,
                    password,
                )
                .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &toasts;
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Welcome back"</h1>
            <p class="auth-page__subtitle">"Sign in to your account to continue"</p>

            <form class="auth-page__form" on:submit=on_submit>
                <label class="auth-page__label">
                    "Username"
                    <input
                        class="auth-page__input"
                        type="text"
                        required
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        required
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=loading>
                    {move || if loading() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "Don't have an account? "
                <a href="/register">"Sign up"</a>
            </p>
        </div>
    }
}
