mod auth_callback;
mod dashboard;
mod landing;
mod service_detail;
mod services;

pub(crate) use auth_callback::AuthCallbackPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use landing::LandingPage;
pub(crate) use service_detail::ServiceDetailPage;
pub(crate) use services::ServicesPage;

use crate::features::auth::{RequireSession, callback};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

/// Top-level router. A URL fragment carrying the one-time session marker takes
/// over rendering so the identifier is consumed before any other page mounts.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let location = use_location();
    let has_session_marker = move || callback::has_session_marker(&location.hash.get());

    view! {
        <Show when=has_session_marker fallback=|| view! { <PageRoutes /> }>
            <AuthCallbackPage />
        </Show>
    }
}

#[component]
fn PageRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <LandingPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/services") view=ServicesPage />
            <Route path=path!("/services/:id") view=ServiceDetailPage />
            <Route
                path=path!("/dashboard")
                view=|| view! { <RequireSession><DashboardPage /></RequireSession> }
            />
        </Routes>
    }
}
