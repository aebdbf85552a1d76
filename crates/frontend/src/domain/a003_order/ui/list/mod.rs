pub mod state;

use self::state::create_state;
use crate::domain::a003_order::api::order_store;
use crate::domain::a003_order::ui::status_select::OrderStatusSelect;
use crate::domain::a003_order::StatusFilter;
use crate::layout::global_context::use_global_context;
use crate::shared::components::page_header::{FallbackBanner, PageHeader};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::OrderStatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal::{ConfirmationModal, ModalState};
use crate::shared::resource_store::Operation;
use crate::shared::toast::{notify, CrudAction};
use contracts::domain::a003_order::aggregate::{Order, OrderStats, OrderStatus};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let ctx = use_global_context();
    let orders = ctx.orders;
    let state = create_state(ctx.page_size());
    let controller = state.controller;
    let modal = state.modal;

    Effect::new(move |_| {
        let needs_load = orders.with_untracked(|s| !s.is_loaded() && !s.is_pending(Operation::Load));
        if needs_load {
            spawn_local(async move { order_store(&ctx).load().await });
        }
    });

    Effect::new(move |_| {
        orders.with(|s| controller.update(|c| c.resync(&s.items)));
    });

    let page = Memo::new(move |_| orders.with(|s| controller.with(|c| c.derive(&s.items).to_page())));
    let stats = Memo::new(move |_| orders.with(|s| OrderStats::from_orders(&s.items)));
    let loading = Signal::derive(move || orders.with(|s| s.is_pending(Operation::Load)));
    let fallback_reason = Signal::derive(move || {
        orders.with(|s| {
            s.is_fallback()
                .then(|| s.error(Operation::Load).map(str::to_string))
                .flatten()
        })
    });
    let search_term = Signal::derive(move || controller.with(|c| c.search_term().to_string()));

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(order) = modal.with_untracked(|m| m.deleting().cloned()) else {
            return;
        };
        spawn_local(async move {
            let ok = order_store(&ctx).delete(order.id).await;
            notify(ctx.toast, CrudAction::Delete, Order::LABEL, order.display_name(), ok);
            modal.set(ModalState::Closed);
        });
    });
    let close_modal = Callback::new(move |_: ()| modal.set(ModalState::Closed));

    view! {
        <div class="page">
            <PageHeader title="Orders" subtitle="Track and update orders">
                <SearchInput
                    value=search_term
                    on_change=Callback::new(move |term: String| controller.update(|c| c.set_search(term)))
                    placeholder="Search by customer name or email..."
                />
                <select
                    class="form__select filter-select"
                    on:change=move |ev| {
                        let filter = StatusFilter::parse(&event_target_value(&ev));
                        controller.update(|c| c.set_toggle(filter));
                    }
                    prop:value=move || controller.with(|c| c.toggle().as_str())
                >
                    <option value="ALL">"All statuses"</option>
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </PageHeader>

            <FallbackBanner reason=fallback_reason />

            <div class="stat-grid">
                <StatCard
                    label="Total Orders"
                    icon_name="orders"
                    value=Signal::derive(move || stats.with(|s| s.total.to_string()))
                />
                <StatCard
                    label="Pending"
                    icon_name="orders"
                    tone=StatTone::Warning
                    value=Signal::derive(move || stats.with(|s| s.pending.to_string()))
                />
                <StatCard
                    label="Preparing"
                    icon_name="orders"
                    tone=StatTone::Primary
                    value=Signal::derive(move || stats.with(|s| s.preparing.to_string()))
                />
                <StatCard
                    label="Delivered"
                    icon_name="orders"
                    tone=StatTone::Success
                    value=Signal::derive(move || stats.with(|s| s.delivered.to_string()))
                />
            </div>

            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Customer"</th>
                            <th>"Date"</th>
                            <th>"Total"</th>
                            <th>"Items"</th>
                            <th>"Status"</th>
                            <th class="text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || !loading.get() fallback=|| view! {
                            <tr><td colspan="7" class="table-message">"Loading orders..."</td></tr>
                        }>
                            {move || {
                                let rows = page.get().rows;
                                if rows.is_empty() {
                                    return view! {
                                        <tr><td colspan="7" class="table-message">"No orders found"</td></tr>
                                    }.into_any();
                                }
                                let term = search_term.get();
                                rows.into_iter().map(|order| {
                                    let for_select = order.clone();
                                    let for_delete = order.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <A href=format!("/orders/{}", order.id)>
                                                    {format!("#{}", order.id)}
                                                </A>
                                            </td>
                                            <td>
                                                <div class="cell-title">{highlight_matches(&order.customer.name, &term)}</div>
                                                <div class="cell-subtitle">{highlight_matches(&order.customer.email, &term)}</div>
                                            </td>
                                            <td>{format_datetime(&order.order_date)}</td>
                                            <td>{format_money(order.total)}</td>
                                            <td>{order.item_count()}</td>
                                            <td><OrderStatusBadge status=order.status /></td>
                                            <td class="table-actions">
                                                <OrderStatusSelect ctx=ctx order=for_select />
                                                <a href=format!("/orders/{}", order.id) class="button button--icon" title="View">
                                                    {icon("eye")}
                                                </a>
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Delete"
                                                    on:click=move |_| modal.set(ModalState::ConfirmDelete(for_delete.clone()))
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }}
                        </Show>
                    </tbody>
                </table>

                <PaginationControls
                    current_page=Signal::derive(move || page.with(|p| p.current_page))
                    total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                    window=Signal::derive(move || page.with(|p| p.window.clone()))
                    range=Signal::derive(move || page.with(|p| (p.first_item, p.last_item, p.filtered_count)))
                    on_page_change=Callback::new(move |target: usize| {
                        let total = page.with_untracked(|p| p.total_pages);
                        controller.update(|c| c.go_to(target, total));
                    })
                />
            </div>

            {move || match modal.get() {
                ModalState::ConfirmDelete(order) => view! {
                    <ConfirmationModal
                        title="Delete Order"
                        message=format!("Are you sure you want to delete order #{} from \"{}\"?", order.id, order.customer.name)
                        pending=Signal::derive(move || orders.with(|s| s.is_pending(Operation::Delete)))
                        on_confirm=confirm_delete
                        on_close=close_modal
                    />
                }.into_any(),
                _ => ().into_any(),
            }}
        </div>
    }
}
