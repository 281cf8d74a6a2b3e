//! Inline alert banners. Messages must be safe to render and should never
//! include secrets or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-red-500/40 bg-red-950/40 px-4 py-3 text-sm text-red-200"
        }
        AlertKind::Info => {
            "rounded-lg border border-indigo-500/40 bg-indigo-950/40 px-4 py-3 text-sm text-indigo-200"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
