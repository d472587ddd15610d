use crate::components::icons::Check;
use crate::store::use_store;
use leptos::prelude::*;
use storefront_shared::SubscriptionPlan;

#[component]
pub fn Catalog() -> impl IntoView {
    let ctx = use_store();

    view! {
        <section id="plans" class="max-w-7xl mx-auto px-4 md:px-8 py-16">
            <div class="text-center mb-12">
                <h3 class="text-3xl font-bold mb-4">"Choose Your Plan"</h3>
                <p class="text-xl text-base-content/70">"Select from our premium subscription options"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                <For
                    each=move || ctx.state.with(|s| s.catalog.clone())
                    key=|plan| plan.id.clone()
                    children=move |plan| view! { <PlanCard plan=plan /> }
                />
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: SubscriptionPlan) -> impl IntoView {
    let ctx = use_store();
    let plan_id = plan.id.clone();

    let on_purchase = move |_| {
        let plan_id = plan_id.clone();
        ctx.spawn(move |store| async move {
            store.purchase(&plan_id).await;
        });
    };

    let features = plan
        .features
        .iter()
        .map(|feature| {
            view! {
                <li class="flex items-center text-base-content/70">
                    <Check attr:class="w-4 h-4 text-success mr-2" />
                    {feature.clone()}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow">
            <figure class="h-48 relative">
                <img src=plan.image_url.clone() alt=plan.service_name.clone() class="w-full h-full object-cover" />
                <div class="badge badge-primary absolute top-4 left-4">{plan.service_name.clone()}</div>
            </figure>
            <div class="card-body">
                <h4 class="card-title">{plan.plan_name.clone()}</h4>
                <div class="flex items-baseline mb-4">
                    <span class="text-3xl font-bold text-primary">{plan.display_price()}</span>
                    <span class="text-base-content/70 ml-2">{format!("/{}", plan.duration)}</span>
                </div>
                <ul class="mb-6 space-y-2">{features}</ul>
                <div class="card-actions">
                    <button class="btn btn-primary w-full" on:click=on_purchase>
                        "Get Started"
                    </button>
                </div>
            </div>
        </div>
    }
}
