//! Primary pill button used across the marketplace pages.

use leptos::{ev::MouseEvent, prelude::*};

const BUTTON_CLASS: &str = "rounded-full bg-indigo-600 hover:bg-indigo-700 text-white font-semibold text-sm px-6 py-2.5 shadow-lg shadow-indigo-600/30 transition-colors";

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional)] test_id: Option<&'static str>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.unwrap_or("button")
            data-testid=test_id
            class=BUTTON_CLASS
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
            on:click=move |event| {
                if let Some(on_click) = on_click {
                    on_click.run(event);
                }
            }
        >
            {children()}
        </button>
    }
}
