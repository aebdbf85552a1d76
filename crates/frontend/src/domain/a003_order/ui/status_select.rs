use contracts::domain::a003_order::aggregate::{Order, OrderStatus};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_order::api::order_store;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::resource_store::Operation;
use crate::shared::toast::{notify, CrudAction};

/// Sends the new status and reports the outcome as a toast
pub fn change_status(ctx: AppGlobalContext, order: &Order, status: OrderStatus) {
    if order.status == status {
        return;
    }
    let id = order.id;
    let name = order.display_name().to_string();
    spawn_local(async move {
        let ok = order_store(&ctx).set_status(id, status).await;
        notify(ctx.toast, CrudAction::ChangeStatus, Order::LABEL, &name, ok);
    });
}

#[component]
pub fn OrderStatusSelect(
    ctx: AppGlobalContext,
    order: Order,
) -> impl IntoView {
    let current = order.status;
    let busy = Signal::derive(move || ctx.orders.with(|s| s.is_pending(Operation::Status)));

    view! {
        <select
            class="form__select status-select"
            disabled=move || busy.get()
            on:change=move |ev| {
                if let Some(status) = OrderStatus::parse(&event_target_value(&ev)) {
                    change_status(ctx, &order, status);
                }
            }
        >
            {OrderStatus::ALL
                .into_iter()
                .map(|s| {
                    let is_current = s == current;
                    view! { <option value=s.as_str() selected=is_current>{s.label()}</option> }
                })
                .collect_view()}
        </select>
    }
}
