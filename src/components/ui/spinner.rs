use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-12 w-12 animate-spin rounded-full border-4 border-solid border-indigo-500 border-r-transparent"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}

/// Full-screen neutral loading state, without any page chrome.
#[component]
pub fn LoadingScreen(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div data-testid="loading-screen" class="min-h-screen bg-zinc-950 flex items-center justify-center">
            <div class="text-center">
                <Spinner />
                <p class="mt-4 text-zinc-400">{message}</p>
            </div>
        </div>
    }
}
