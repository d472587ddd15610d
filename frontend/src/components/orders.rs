use crate::store::use_store;
use leptos::prelude::*;
use storefront_shared::{Order, StatusTone};

/// 状态徽章样式：completed 绿色，pending 黄色，其余红色
pub fn status_badge_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Success => "badge badge-success",
        StatusTone::Warning => "badge badge-warning",
        StatusTone::Error => "badge badge-error",
    }
}

#[component]
pub fn OrdersSection() -> impl IntoView {
    let ctx = use_store();

    view! {
        <Show when=move || ctx.state.with(|s| s.shows_orders())>
            <section class="max-w-7xl mx-auto px-4 md:px-8 py-16">
                <h3 class="text-2xl font-bold mb-8">"Your Orders"</h3>
                <div class="card bg-base-100 shadow-xl">
                    <div class="overflow-x-auto">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Order ID"</th>
                                    <th>"Plan"</th>
                                    <th>"Amount"</th>
                                    <th>"Status"</th>
                                    <th>"Date"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || ctx.state.with(|s| s.orders.clone())
                                    key=|order| order.id.clone()
                                    children=|order| view! { <OrderRow order=order /> }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </section>
        </Show>
    }
}

#[component]
fn OrderRow(order: Order) -> impl IntoView {
    let badge = status_badge_class(order.status.tone());

    view! {
        <tr>
            <td class="font-mono text-sm">{order.id.clone()}</td>
            <td class="text-sm">{order.subscription_plan_id.clone()}</td>
            <td class="text-sm">{order.display_amount()}</td>
            <td>
                <span class=badge>{order.status.to_string()}</span>
            </td>
            <td class="text-sm text-base-content/50">{order.display_date()}</td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_shared::OrderStatus;

    fn badge_for(status: &str) -> &'static str {
        status_badge_class(OrderStatus::from(status.to_string()).tone())
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(badge_for("completed"), "badge badge-success");
        assert_eq!(badge_for("pending"), "badge badge-warning");
        assert_eq!(badge_for("failed"), "badge badge-error");
        assert_eq!(badge_for("cancelled"), "badge badge-error");
        assert_eq!(badge_for("whatever"), "badge badge-error");
    }
}
