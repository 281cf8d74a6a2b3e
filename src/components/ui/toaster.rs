//! Transient notifications in the top-right corner. Each toast removes itself
//! after a few seconds.

use crate::features::auth::navigation::{Notice, NoticeKind};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Debug)]
struct Toast {
    id: u64,
    notice: Notice,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.items.update(|items| items.push(Toast { id, notice }));

        let items = self.items;
        let _ = Timeout::new(TOAST_TTL_MS, move || {
            let _ = items.try_update(|items| items.retain(|toast| toast.id != id));
        })
        .forget();
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Notice::error(message));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Notice::success(message));
    }
}

/// Returns the toast queue, creating a detached one outside the toaster.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(Toasts::new)
}

/// Provides the toast queue to `children` and renders the visible toasts.
#[component]
pub fn Toaster(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    provide_context(toasts);

    view! {
        {children()}
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=|toast| {
                    let class = match toast.notice.kind {
                        NoticeKind::Success => "rounded-lg border border-emerald-500/40 bg-zinc-900 px-4 py-3 text-sm text-emerald-200 shadow-lg",
                        NoticeKind::Error => "rounded-lg border border-red-500/40 bg-zinc-900 px-4 py-3 text-sm text-red-200 shadow-lg",
                    };
                    view! { <div class=class role="status">{toast.notice.message}</div> }
                }
            />
        </div>
    }
}
