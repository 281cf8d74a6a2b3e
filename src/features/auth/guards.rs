use crate::components::LoadingScreen;
use crate::features::auth::{
    guard::{GuardState, GuardView, Liveness},
    state::{navigate_options, use_session},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::{use_location, use_navigate};

/// Wraps a protected view. Every mount asks the backend again; nothing is
/// rendered but the loading screen until it answers.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let requested = use_location().pathname.get_untracked();
    let state = RwSignal::new(GuardState::Checking);

    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.end()
    });

    let core = session.session();
    spawn_local(async move {
        let next = core.check().await;
        liveness.settle(next, |next| {
            session.sync();
            let _ = state.try_set(next);
        });
    });

    let redirect_from = requested.clone();
    Effect::new(move |_| {
        // UX-only guard; the API enforces access on every call.
        if let GuardView::Redirect(destination) = state.get().view(&redirect_from) {
            navigate(destination.path(), navigate_options(&destination));
        }
    });

    view! {
        {move || match state.get().view(&requested) {
            GuardView::Loading => view! { <LoadingScreen message="Loading..." /> }.into_any(),
            GuardView::Content(identity) => {
                provide_context(identity);
                children().into_any()
            }
            GuardView::Redirect(_) => ().into_any(),
        }}
    }
}
