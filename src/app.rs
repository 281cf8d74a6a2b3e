//! Application root: toasts, the session context and the router.

use crate::components::Toaster;
use crate::features::auth::state::SessionProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Toaster>
            <SessionProvider>
                <Router>
                    <AppRoutes />
                </Router>
            </SessionProvider>
        </Toaster>
    }
}
