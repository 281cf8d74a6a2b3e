//! Landing spot for the identity provider redirect. Consumes the one-time
//! identifier exactly once per mount, then leaves with a toast and a
//! navigation on every path.

use crate::app_lib::browser;
use crate::components::{Spinner, use_toasts};
use crate::features::auth::{
    bootstrap::Bootstrap,
    state::{navigate_options, use_session},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let bootstrap = StoredValue::new_local(Bootstrap::new());

    Effect::new(move |_| {
        let fragment = browser::current_fragment();
        let Some(exchange) = bootstrap.with_value(|bootstrap| bootstrap.start(session.session(), &fragment))
        else {
            return;
        };
        browser::replace_url(&pathname.get_untracked());

        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = exchange.await;
            session.sync();
            toasts.push(outcome.notice);
            navigate(
                outcome.destination.path(),
                navigate_options(&outcome.destination),
            );
        });
    });

    view! {
        <div data-testid="auth-callback" class="min-h-screen bg-zinc-950 flex items-center justify-center">
            <div class="text-center">
                <Spinner />
                <p class="mt-4 text-zinc-400">"Completing sign in..."</p>
            </div>
        </div>
    }
}
