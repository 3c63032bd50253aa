//! Registration page with the full account form and role selection.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Registration form. A successful submission redirects to the login page;
/// it never logs the user in directly.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);

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
            let payload = crate::net::types::RegisterPayload {
                username: username.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                password2: password2.get_untracked(),
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
                role: role.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                crate::state::session::register(
                    session,
                    toasts,
                    move |path| navigate(path, leptos_router::NavigateOptions::default()),
                    payload,
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
            <h1>"Create an account"</h1>
            <p class="auth-page__subtitle">"Join EduSmart to start your learning journey"</p>

            <form class="auth-page__form" on:submit=on_submit>
                <div class="auth-page__row">
                    <label class="auth-page__label">
                        "First Name"
                        <input
                            class="auth-page__input"
                            type="text"
                            required
                            placeholder="John"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-page__label">
                        "Last Name"
                        <input
                            class="auth-page__input"
                            type="text"
                            required
                            placeholder="Doe"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="auth-page__label">
                    "Username"
                    <input
                        class="auth-page__input"
                        type="text"
                        required
                        placeholder="johndoe"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        required
                        placeholder="john.doe@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Confirm Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        required
                        prop:value=move || password2.get()
                        on:input=move |ev| password2.set(event_target_value(&ev))
                    />
                </label>

                <fieldset class="auth-page__roles">
                    <legend>"I am a"</legend>
                    <RoleOption role=role value=Role::Student label="Student"/>
                    <RoleOption role=role value=Role::Parent label="Parent"/>
                    <RoleOption role=role value=Role::Teacher label="Teacher"/>
                </fieldset>

                <button class="btn btn--primary" type="submit" disabled=loading>
                    {move || if loading() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "Already have an account? "
                <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}

/// One radio option in the role selector.
#[component]
fn RoleOption(role: RwSignal<Role>, value: Role, label: &'static str) -> impl IntoView {
    view! {
        <label class="auth-page__role">
            <input
                type="radio"
                name="user_type"
                prop:checked=move || role.get() == value
                on:change=move |_| role.set(value)
            />
            {label}
        </label>
    }
}
