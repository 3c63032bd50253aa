//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::toaster::Toaster;
use crate::pages::dashboard::{DashboardPage, ParentDashboardPage, TeacherDashboardPage};
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, kicks off the one-time
/// restore-and-validate of the persisted token, and sets up client-side
/// routing with the guard wrapped around every protected page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toasts);

    // Until this settles the guard stays in its checking state.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::session::restore(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/edusmart-client.css"/>
        <Title text="EduSmart"/>

        <Toaster/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedRoute>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("parent") view=ParentDashboardPage/>
                    <Route path=StaticSegment("teacher") view=TeacherDashboardPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
