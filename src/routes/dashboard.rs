//! Protected dashboard. Mounted only inside `RequireSession`, so the identity
//! is always present here.

use crate::app_lib::paths;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::state::{use_current_user, use_session};
use crate::features::orders::{client::list_orders, summary::DashboardSummary, types::Order};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let user = use_current_user();
    let name = user.as_ref().map(|user| user.name.clone()).unwrap_or_default();
    let role = user
        .as_ref()
        .map(|user| if user.is_creator() { "Creator" } else { "Client" })
        .unwrap_or("Client");

    let orders = LocalResource::new(move || {
        let token = session.token();
        async move { list_orders(token.as_ref()).await }
    });

    view! {
        <AppShell>
            <div data-testid="dashboard-page" class="space-y-8">
                <div>
                    <h1 class="text-3xl font-bold">{format!("Welcome back, {name}")}</h1>
                    <p class="text-sm text-zinc-400">{role} " account"</p>
                </div>
                <Suspense fallback=|| view! { <div class="flex justify-center py-16"><Spinner /></div> }>
                    {move || match orders.get() {
                        None => view! { <div class="flex justify-center py-16"><Spinner /></div> }.into_any(),
                        Some(Ok(list)) => {
                            let summary = DashboardSummary::from_orders(&list.orders);
                            view! { <Summary summary /> }.into_any()
                        }
                        Some(Err(err)) => {
                            tracing::warn!(error = %err, "failed to load orders");
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                        }
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}

#[component]
fn Summary(summary: DashboardSummary) -> impl IntoView {
    let revenue = summary.revenue_display();
    let count = summary.order_count;

    view! {
        <div class="grid gap-6 sm:grid-cols-2">
            <Stat label="Orders" value=count.to_string() test_id="order-count" />
            <Stat label="Completed revenue" value=revenue test_id="revenue" />
        </div>
        <section class="rounded-2xl border border-zinc-800 bg-zinc-900/50 p-6">
            <h2 class="text-lg font-semibold mb-4">"Recent orders"</h2>
            {if summary.recent.is_empty() {
                view! {
                    <p class="text-sm text-zinc-400">
                        "No orders yet. "
                        <A href=paths::SERVICES {..} class="text-indigo-400 hover:text-indigo-300">
                            "Browse services"
                        </A>
                    </p>
                }
                .into_any()
            } else {
                view! {
                    <ul class="divide-y divide-zinc-800">
                        {summary.recent.into_iter().map(|order| view! { <OrderRow order /> }).collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn Stat(label: &'static str, value: String, test_id: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-zinc-800 bg-zinc-900/50 p-6">
            <p class="text-sm text-zinc-400">{label}</p>
            <p data-testid=test_id class="mt-2 text-3xl font-bold">{value}</p>
        </div>
    }
}

#[component]
fn OrderRow(order: Order) -> impl IntoView {
    view! {
        <li class="py-3 flex items-center justify-between text-sm">
            <div>
                <p class="font-medium">{order.tier_name}</p>
                <p class="text-xs text-zinc-500">{order.order_id}</p>
            </div>
            <div class="flex items-center gap-4">
                <span class="rounded-full border border-zinc-700 px-3 py-1 text-xs">{order.status.label()}</span>
                <span class="font-semibold">{format!("${:.2}", order.price)}</span>
            </div>
        </li>
    }
}
