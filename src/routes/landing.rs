//! Public landing page with the sign-in entry points.

use crate::app_lib::paths;
use crate::components::{AppShell, Button, use_toasts};
use crate::features::auth::sign_in;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    let toasts = use_toasts();
    let on_get_started = move |_: leptos::ev::MouseEvent| {
        if let Err(err) = sign_in::begin() {
            tracing::warn!(error = %err, "sign-in hand-off failed");
            toasts.error("Unable to start sign in");
        }
    };

    view! {
        <AppShell>
            <section data-testid="landing-page" class="max-w-5xl mx-auto text-center pt-16 pb-24">
                <h1 class="text-5xl md:text-7xl font-bold tracking-tight mb-6">
                    "The Creative Marketplace"
                    <br />
                    <span class="text-indigo-400">"Built for Creators"</span>
                </h1>
                <p class="text-xl md:text-2xl text-zinc-400 mb-10 max-w-3xl mx-auto leading-relaxed">
                    "Connect with top-tier creators for video editing, thumbnails, graphics, and audio."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Button test_id="get-started-btn" on_click=on_get_started>
                        "Get Started"
                    </Button>
                    <A
                        href=paths::SERVICES
                        {..}
                        data-testid="browse-services-btn"
                        class="rounded-full px-6 py-2.5 text-sm font-semibold border border-zinc-700 hover:bg-zinc-900"
                    >
                        "Browse Services"
                    </A>
                </div>
            </section>
        </AppShell>
    }
}
