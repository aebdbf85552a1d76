use contracts::domain::a003_order::aggregate::latest_orders;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::dashboards::d400_overview::{Overview, LATEST_ORDERS};
use crate::domain::a001_customer::api::customer_store;
use crate::domain::a002_dish::api::dish_store;
use crate::domain::a003_order::api::order_store;
use crate::layout::global_context::use_global_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::OrderStatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;
use crate::shared::resource_store::Operation;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let (customers, dishes, orders) = (ctx.customers, ctx.dishes, ctx.orders);

    // Each resource is fetched once per session; later visits reuse the stores
    Effect::new(move |_| {
        if customers.with_untracked(|s| !s.is_loaded() && !s.is_pending(Operation::Load)) {
            spawn_local(async move { customer_store(&ctx).load().await });
        }
        if dishes.with_untracked(|s| !s.is_loaded() && !s.is_pending(Operation::Load)) {
            spawn_local(async move { dish_store(&ctx).load().await });
        }
        if orders.with_untracked(|s| !s.is_loaded() && !s.is_pending(Operation::Load)) {
            spawn_local(async move { order_store(&ctx).load().await });
        }
    });

    let overview = Memo::new(move |_| {
        customers.with(|c| dishes.with(|d| orders.with(|o| Overview::collect(&c.items, &d.items, &o.items))))
    });
    let latest = Memo::new(move |_| {
        orders.with(|s| {
            latest_orders(&s.items, LATEST_ORDERS)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let using_samples = Signal::derive(move || {
        customers.with(|s| s.is_fallback()) || dishes.with(|s| s.is_fallback()) || orders.with(|s| s.is_fallback())
    });

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle="Restaurant overview">
                <Show when=move || using_samples.get()>
                    <span class="badge badge--warning">"Sample data"</span>
                </Show>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Customers"
                    icon_name="customers"
                    value=Signal::derive(move || overview.with(|o| o.customers.to_string()))
                    subtitle=Signal::derive(move || overview.with(|o| Some(format!("{} active", o.active_customers))))
                />
                <StatCard
                    label="Dishes"
                    icon_name="dishes"
                    tone=StatTone::Primary
                    value=Signal::derive(move || overview.with(|o| o.dishes.to_string()))
                    subtitle=Signal::derive(move || overview.with(|o| Some(format!("{} on the menu", o.active_dishes))))
                />
                <StatCard
                    label="Orders"
                    icon_name="orders"
                    tone=StatTone::Warning
                    value=Signal::derive(move || overview.with(|o| o.orders.to_string()))
                    subtitle=Signal::derive(move || overview.with(|o| Some(format!("{} in progress", o.open_orders))))
                />
                <StatCard
                    label="Revenue"
                    icon_name="orders"
                    tone=StatTone::Success
                    value=Signal::derive(move || overview.with(|o| format_money(o.revenue)))
                />
            </div>

            <div class="table-container">
                <h3 class="card__title">"Latest orders"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Customer"</th>
                            <th>"Date"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = latest.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr><td colspan="5" class="table-message">"No orders yet"</td></tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|order| view! {
                                <tr>
                                    <td><A href=format!("/orders/{}", order.id)>{format!("#{}", order.id)}</A></td>
                                    <td>{order.customer.name.clone()}</td>
                                    <td>{format_datetime(&order.order_date)}</td>
                                    <td>{format_money(order.total)}</td>
                                    <td><OrderStatusBadge status=order.status /></td>
                                </tr>
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
