//! Shared layout wrapper with navigation and content container. The header
//! switches between "Sign In" and "Dashboard / Sign Out" from the session
//! context. Navigation is client-side only; the API enforces access control.

use crate::app_lib::{build_info::git_commit_hash, paths};
use crate::components::{Button, use_toasts};
use crate::features::auth::{
    sign_in,
    state::{navigate_options, use_session},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

const NAV_LINK: &str = "text-sm font-medium text-zinc-300 hover:text-white transition-colors";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let is_authenticated = session.is_authenticated;

    let on_sign_in = move |_: leptos::ev::MouseEvent| {
        if let Err(err) = sign_in::begin() {
            tracing::warn!(error = %err, "sign-in hand-off failed");
            toasts.error("Unable to start sign in");
        }
    };

    let on_sign_out = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            let destination = session.logout().await;
            navigate(destination.path(), navigate_options(&destination));
        });
    };

    view! {
        <div class="min-h-screen flex flex-col bg-zinc-950 text-white">
            <header class="bg-zinc-900/50 border-b border-zinc-800 sticky top-0 z-10 backdrop-blur-sm">
                <nav class="px-6 md:px-12 py-4 flex items-center justify-between">
                    <A href=paths::LANDING {..} class="text-2xl font-bold">
                        "CreativeHub"
                    </A>
                    <div class="flex items-center gap-6">
                        <A href=paths::SERVICES {..} class=NAV_LINK>
                            "Services"
                        </A>
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <Button test_id="nav-login-btn" on_click=on_sign_in>
                                        "Sign In"
                                    </Button>
                                }
                            }
                        >
                            <A href=paths::DASHBOARD {..} class=NAV_LINK>
                                "Dashboard"
                            </A>
                            <button
                                type="button"
                                data-testid="logout-btn"
                                class=NAV_LINK
                                on:click=on_sign_out.clone()
                            >
                                "Sign Out"
                            </button>
                        </Show>
                    </div>
                </nav>
            </header>
            <main class="flex-1">
                <div class="container mx-auto px-6 md:px-12 py-8">{children()}</div>
            </main>
            <footer class="px-6 md:px-12 py-6 text-xs text-zinc-600">
                "CreativeHub · " {git_commit_hash()}
            </footer>
        </div>
    }
}
