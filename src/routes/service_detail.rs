//! Service detail with tier selection and checkout. Placing an order ends in
//! a hand-off to the payment page.

use crate::app_lib::{AppError, browser, paths};
use crate::components::{AppShell, Button, Spinner, use_toasts};
use crate::features::auth::state::use_session;
use crate::features::orders::{
    checkout::{place_order, validate_order},
    client::HttpOrderApi,
    types::CreateOrderRequest,
};
use crate::features::services::{client, query::category_label, types::Service};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{
    NavigateOptions,
    hooks::{use_navigate, use_params},
    params::Params,
};

#[derive(Params, Clone, Debug, PartialEq)]
struct ServiceParams {
    id: Option<String>,
}

#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params::<ServiceParams>();
    let navigate = use_navigate();
    let toasts = use_toasts();

    let service = LocalResource::new(move || {
        let id = params.get().ok().and_then(|p| p.id).unwrap_or_default();
        async move { client::fetch_service(&id).await }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = service.get() {
            tracing::debug!(error = %err, "service lookup failed");
            toasts.error("Service not found");
            navigate(
                paths::SERVICES,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <AppShell>
            <Suspense fallback=|| view! { <div class="flex justify-center py-16"><Spinner /></div> }>
                {move || match service.get() {
                    Some(Ok(service)) => view! { <ServiceDetail service /> }.into_any(),
                    _ => view! { <div class="flex justify-center py-16"><Spinner /></div> }.into_any(),
                }}
            </Suspense>
        </AppShell>
    }
}

#[component]
fn ServiceDetail(service: Service) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let (tier, set_tier) = signal(service.tiers.first().map(|tier| tier.name.clone()));
    let (requirements, set_requirements) = signal(String::new());

    let order_action = Action::new_local(move |request: &CreateOrderRequest| {
        let request = request.clone();
        let token = session.token();
        async move {
            let origin = browser::current_origin()
                .ok_or_else(|| AppError::Config("Page origin is unavailable.".to_string()))?;
            place_order(&HttpOrderApi, token.as_ref(), &request, &origin).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = order_action.value().get() {
            match result {
                Ok(checkout) => {
                    toasts.success("Order created! Proceeding to payment...");
                    browser::hand_off(&checkout.url);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "order failed");
                    toasts.error("Failed to create order");
                }
            }
        }
    });

    let service_id = service.service_id.clone();
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        match validate_order(
            session.is_authenticated.get_untracked(),
            &service_id,
            tier.get_untracked().as_deref(),
            &requirements.get_untracked(),
        ) {
            Ok(request) => {
                order_action.dispatch(request);
            }
            Err(rejection) => toasts.error(rejection.to_string()),
        }
    };

    let category = category_label(&service.category).to_string();
    let tiers = service.tiers.clone();
    let selected_features = {
        let service = service.clone();
        move || {
            tier.get()
                .and_then(|name| service.tier(&name).map(|tier| tier.features.clone()))
                .unwrap_or_default()
        }
    };

    view! {
        <div data-testid="service-detail-page" class="grid gap-10 lg:grid-cols-3">
            <div class="lg:col-span-2 space-y-4">
                <p class="text-xs uppercase tracking-wide text-indigo-400">{category}</p>
                <h1 class="text-4xl font-bold">{service.title}</h1>
                <p class="text-zinc-300 leading-relaxed">{service.description}</p>
                <p class="text-sm text-zinc-400">
                    {format!("★ {:.1} · {} reviews", service.rating, service.review_count)}
                </p>
            </div>
            <form class="rounded-2xl border border-zinc-800 bg-zinc-900/50 p-6 space-y-5" on:submit=on_submit>
                <div class="space-y-2">
                    {tiers
                        .into_iter()
                        .map(|option| {
                            let name = option.name.clone();
                            let selected = {
                                let name = name.clone();
                                Memo::new(move |_| tier.get().as_deref() == Some(name.as_str()))
                            };
                            view! {
                                <button
                                    type="button"
                                    class="w-full text-left rounded-xl border px-4 py-3 transition-colors"
                                    class:border-indigo-500=move || selected.get()
                                    class:border-zinc-800=move || !selected.get()
                                    on:click=move |_| set_tier.set(Some(name.clone()))
                                >
                                    <div class="flex justify-between font-semibold">
                                        <span>{option.name.clone()}</span>
                                        <span>{format!("${:.2}", option.price)}</span>
                                    </div>
                                    <p class="text-xs text-zinc-400">
                                        {format!(
                                            "{} day delivery · {} revisions",
                                            option.delivery_days,
                                            option.revisions,
                                        )}
                                    </p>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <ul data-testid="tier-features" class="space-y-1 text-sm text-zinc-300">
                    {move || {
                        selected_features()
                            .into_iter()
                            .map(|feature| view! { <li>"✓ " {feature}</li> })
                            .collect_view()
                    }}
                </ul>
                <textarea
                    data-testid="requirements-input"
                    class="w-full min-h-32 rounded-xl bg-zinc-950 border border-zinc-800 p-3 text-sm focus:border-indigo-500 focus:outline-none"
                    placeholder="Describe what you need..."
                    on:input=move |event| set_requirements.set(event_target_value(&event))
                ></textarea>
                <Button button_type="submit" test_id="order-btn" disabled=order_action.pending()>
                    "Continue to payment"
                </Button>
            </form>
        </div>
    }
}
