use contracts::domain::a003_order::aggregate::Order;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::domain::a003_order::api::order_store;
use crate::domain::a003_order::ui::status_select::OrderStatusSelect;
use crate::layout::global_context::use_global_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{ActiveBadge, OrderStatusBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct OrderRouteParams {
    pub id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq)]
enum Lookup {
    Loading,
    Found(Order),
    Missing,
}

#[component]
#[allow(non_snake_case)]
pub fn OrderDetailPage() -> impl IntoView {
    let ctx = use_global_context();
    let orders = ctx.orders;
    let params = use_params::<OrderRouteParams>();
    let order_id = Memo::new(move |_| params.get().ok().and_then(|p| p.id));
    let fetched: RwSignal<Option<Lookup>> = RwSignal::new(None);

    Effect::new(move |_| {
        let Some(id) = order_id.get() else {
            fetched.set(Some(Lookup::Missing));
            return;
        };
        fetched.set(Some(Lookup::Loading));
        spawn_local(async move {
            let found = order_store(&ctx).get(id).await;
            if found.is_none() {
                log::warn!("order {} not found", id);
            }
            fetched.set(Some(found.map_or(Lookup::Missing, Lookup::Found)));
        });
    });

    // Status changes land in the shared store, so it wins over the fetched copy
    let lookup = Memo::new(move |_| {
        let local = order_id
            .get()
            .and_then(|id| orders.with(|s| s.find(id).cloned()));
        match local {
            Some(order) => Lookup::Found(order),
            None => fetched.get().unwrap_or(Lookup::Loading),
        }
    });

    view! {
        <div class="page">
            <PageHeader
                title=Signal::derive(move || {
                    order_id.get().map(|id| format!("Order #{}", id)).unwrap_or_else(|| "Order".to_string())
                })
                subtitle="Order details"
            >
                <A href="/orders">
                    <span class="button button--secondary">
                        {icon("arrow-left")}
                        "Back to orders"
                    </span>
                </A>
            </PageHeader>

            {move || match lookup.get() {
                Lookup::Loading => view! { <div class="table-message">"Loading order..."</div> }.into_any(),
                Lookup::Missing => view! { <div class="table-message">"Order not found"</div> }.into_any(),
                Lookup::Found(order) => view! { <OrderSummary order=order /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OrderSummary(order: Order) -> impl IntoView {
    let ctx = use_global_context();
    let items_total = order.items_total();
    let customer = order.customer.clone();
    let status = order.status;

    view! {
        <div class="detail-grid">
            <section class="card">
                <h3 class="card__title">"Order"</h3>
                <dl class="detail-list">
                    <dt>"Date"</dt>
                    <dd>{format_datetime(&order.order_date)}</dd>
                    <dt>"Status"</dt>
                    <dd><OrderStatusBadge status=status /></dd>
                    <dt>"Change status"</dt>
                    <dd><OrderStatusSelect ctx=ctx order=order.clone() /></dd>
                    <dt>"Total"</dt>
                    <dd>{format_money(order.total)}</dd>
                </dl>
            </section>

            <section class="card">
                <h3 class="card__title">"Customer"</h3>
                <dl class="detail-list">
                    <dt>"Name"</dt>
                    <dd>{customer.name.clone()}</dd>
                    <dt>"Email"</dt>
                    <dd>{customer.email.clone()}</dd>
                    <dt>"Type"</dt>
                    <dd>{customer.customer_type.label()}</dd>
                    <dt>"Status"</dt>
                    <dd><ActiveBadge active=customer.active /></dd>
                </dl>
            </section>
        </div>

        <div class="table-container">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Dish"</th>
                        <th>"Unit price"</th>
                        <th>"Quantity"</th>
                        <th>"Notes"</th>
                        <th class="text-right">"Line total"</th>
                    </tr>
                </thead>
                <tbody>
                    {order.items.iter().map(|item| view! {
                        <tr>
                            <td>{item.dish.name.clone()}</td>
                            <td>{format_money(item.unit_price)}</td>
                            <td>{item.quantity}</td>
                            <td>{item.special_notes.clone().unwrap_or_default()}</td>
                            <td class="text-right">{format_money(item.line_total())}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="4" class="text-right">"Items total"</td>
                        <td class="text-right">{format_money(items_total)}</td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}
