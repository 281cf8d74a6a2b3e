//! Catalog listing with category chips and a search box.

use crate::app_lib::paths;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::services::{
    client,
    query::{CATEGORIES, ServiceQuery, category_label},
    types::Service,
};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let (category, set_category) = signal("all".to_string());
    let (search, set_search) = signal(String::new());

    let services = LocalResource::new(move || {
        let query = ServiceQuery {
            category: category.get(),
            search: search.get(),
            ..ServiceQuery::default()
        };
        async move { client::list_services(&query).await }
    });

    view! {
        <AppShell>
            <div data-testid="services-page" class="space-y-8">
                <div class="flex flex-col md:flex-row md:items-center gap-4 justify-between">
                    <h1 class="text-3xl font-bold">"Browse Services"</h1>
                    <input
                        type="search"
                        data-testid="search-input"
                        class="w-full md:w-80 rounded-full bg-zinc-900 border border-zinc-800 px-5 py-2.5 text-sm text-white placeholder-zinc-500 focus:border-indigo-500 focus:outline-none"
                        placeholder="Search services..."
                        on:input=move |event| set_search.set(event_target_value(&event))
                    />
                </div>
                <div class="flex flex-wrap gap-2">
                    {CATEGORIES
                        .iter()
                        .map(|(id, label)| {
                            let id = id.to_string();
                            let is_selected = {
                                let id = id.clone();
                                Memo::new(move |_| category.get() == id)
                            };
                            view! {
                                <button
                                    type="button"
                                    class="rounded-full px-4 py-2 text-sm border transition-colors"
                                    class:bg-indigo-600=move || is_selected.get()
                                    class:border-indigo-600=move || is_selected.get()
                                    class:border-zinc-700=move || !is_selected.get()
                                    on:click=move |_| set_category.set(id.clone())
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <Suspense fallback=|| view! { <div class="flex justify-center py-16"><Spinner /></div> }>
                    {move || match services.get() {
                        None => view! { <div class="flex justify-center py-16"><Spinner /></div> }.into_any(),
                        Some(Ok(list)) if list.services.is_empty() => view! {
                            <Alert kind=AlertKind::Info message="No services match your filters yet.".to_string() />
                        }
                        .into_any(),
                        Some(Ok(list)) => view! {
                            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                                {list.services.into_iter().map(|service| view! { <ServiceCard service /> }).collect_view()}
                            </div>
                        }
                        .into_any(),
                        Some(Err(err)) => {
                            tracing::warn!(error = %err, "failed to load services");
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                        }
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let href = paths::service_detail(&service.service_id);
    let price = service
        .starting_price()
        .map(|price| format!("From ${price:.2}"))
        .unwrap_or_default();
    let category = category_label(&service.category).to_string();

    view! {
        <A href=href {..} class="block rounded-2xl border border-zinc-800 bg-zinc-900/50 p-6 hover:border-indigo-500 transition-colors">
            <p class="text-xs uppercase tracking-wide text-indigo-400">{category}</p>
            <h2 class="mt-2 text-lg font-semibold">{service.title}</h2>
            <p class="mt-2 text-sm text-zinc-400 line-clamp-2">{service.description}</p>
            <div class="mt-4 flex items-center justify-between text-sm">
                <span class="text-zinc-300">{format!("★ {:.1} ({})", service.rating, service.review_count)}</span>
                <span class="font-semibold">{price}</span>
            </div>
        </A>
    }
}
