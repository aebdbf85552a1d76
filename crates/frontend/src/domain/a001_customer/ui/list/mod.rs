pub mod state;

use self::state::create_state;
use crate::domain::a001_customer::api::customer_store;
use crate::domain::a001_customer::ui::details::CustomerDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::components::page_header::{FallbackBanner, PageHeader};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::ActiveBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ActiveFilter, SearchInput};
use crate::shared::modal::{ConfirmationModal, ModalState};
use crate::shared::resource_store::Operation;
use crate::shared::toast::{notify, CrudAction};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerStats};
use contracts::domain::common::{Entity, EntityId};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_global_context();
    let customers = ctx.customers;
    let state = create_state(ctx.page_size());
    let controller = state.controller;
    let modal = state.modal;

    // Load on first mount; later visits reuse the shared collection
    Effect::new(move |_| {
        let needs_load = customers.with_untracked(|s| !s.is_loaded() && !s.is_pending(Operation::Load));
        if needs_load {
            spawn_local(async move { customer_store(&ctx).load().await });
        }
    });

    // Keep the page in range when the collection shrinks
    Effect::new(move |_| {
        customers.with(|s| controller.update(|c| c.resync(&s.items)));
    });

    let page = Memo::new(move |_| {
        customers.with(|s| controller.with(|c| c.derive(&s.items).to_page()))
    });
    let stats = Memo::new(move |_| customers.with(|s| CustomerStats::from_customers(&s.items)));
    let loading = Signal::derive(move || customers.with(|s| s.is_pending(Operation::Load)));
    let fallback_reason = Signal::derive(move || {
        customers.with(|s| {
            if s.is_fallback() {
                s.error(Operation::Load).map(str::to_string)
            } else {
                None
            }
        })
    });
    let search_term = Signal::derive(move || controller.with(|c| c.search_term().to_string()));

    let toggle_status = move |customer: Customer| {
        spawn_local(async move {
            let ok = customer_store(&ctx).toggle_status(customer.id).await;
            let action = CrudAction::for_active(!customer.active);
            notify(ctx.toast, action, Customer::LABEL, &customer.name, ok);
        });
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(customer) = modal.with_untracked(|m| m.deleting().cloned()) else {
            return;
        };
        spawn_local(async move {
            let ok = customer_store(&ctx).delete(customer.id).await;
            notify(ctx.toast, CrudAction::Delete, Customer::LABEL, &customer.name, ok);
            modal.set(ModalState::Closed);
        });
    });

    let on_saved = Callback::new(move |id: EntityId| {
        modal.set(ModalState::Closed);
        customers.with_untracked(|s| {
            controller.update(|c| {
                c.reveal(&s.items, id);
            })
        });
    });
    let close_modal = Callback::new(move |_: ()| modal.set(ModalState::Closed));

    view! {
        <div class="page">
            <PageHeader title="Customers" subtitle="Manage the restaurant's customers">
                <SearchInput
                    value=search_term
                    on_change=Callback::new(move |term: String| controller.update(|c| c.set_search(term)))
                    placeholder="Search customers..."
                />
                <select
                    class="form__select filter-select"
                    on:change=move |ev| {
                        let filter = ActiveFilter::parse(&event_target_value(&ev));
                        controller.update(|c| c.set_toggle(filter));
                    }
                    prop:value=move || controller.with(|c| c.toggle().as_str())
                >
                    {ActiveFilter::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.as_str()>{f.label()}</option> })
                        .collect_view()}
                </select>
                <button class="button button--primary" on:click=move |_| modal.set(ModalState::Create)>
                    {icon("plus")}
                    "Add Customer"
                </button>
            </PageHeader>

            <FallbackBanner reason=fallback_reason />

            <div class="stat-grid">
                <StatCard
                    label="Total Customers"
                    icon_name="customers"
                    value=Signal::derive(move || stats.get().total.to_string())
                />
                <StatCard
                    label="Active Customers"
                    icon_name="customers"
                    tone=StatTone::Success
                    value=Signal::derive(move || stats.get().active.to_string())
                />
                <StatCard
                    label="Inactive Customers"
                    icon_name="customers"
                    tone=StatTone::Error
                    value=Signal::derive(move || stats.get().inactive.to_string())
                />
                <StatCard
                    label="Total Orders"
                    icon_name="orders"
                    value=Signal::derive(move || stats.get().orders.to_string())
                />
            </div>

            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Customer"</th>
                            <th>"Email"</th>
                            <th>"Type"</th>
                            <th>"Orders"</th>
                            <th>"Status"</th>
                            <th>"Last Order"</th>
                            <th class="text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || !loading.get() fallback=|| view! {
                            <tr><td colspan="7" class="table-message">"Loading customers..."</td></tr>
                        }>
                            {move || {
                                let rows = page.get().rows;
                                if rows.is_empty() {
                                    return view! {
                                        <tr><td colspan="7" class="table-message">"No customers found"</td></tr>
                                    }.into_any();
                                }
                                let term = search_term.get();
                                rows.into_iter().map(|customer| {
                                    let last_order = customer
                                        .most_recent_order()
                                        .map(|o| format_date(&o.order_date))
                                        .unwrap_or_else(|| "-".to_string());
                                    let toggle_title = if customer.active { "Deactivate" } else { "Activate" };
                                    let for_toggle = customer.clone();
                                    let for_edit = customer.clone();
                                    let for_delete = customer.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="cell-title">{highlight_matches(&customer.name, &term)}</div>
                                                <div class="cell-subtitle">{format!("ID: #{}", customer.id)}</div>
                                            </td>
                                            <td>{customer.email.clone()}</td>
                                            <td>{customer.customer_type.label()}</td>
                                            <td>{customer.order_count().to_string()}</td>
                                            <td><ActiveBadge active=customer.active /></td>
                                            <td>{last_order}</td>
                                            <td class="table-actions">
                                                <button
                                                    class="button button--icon"
                                                    title=toggle_title
                                                    on:click=move |_| toggle_status(for_toggle.clone())
                                                >
                                                    {icon("power")}
                                                </button>
                                                <button
                                                    class="button button--icon"
                                                    title="Edit"
                                                    on:click=move |_| modal.set(ModalState::Edit(for_edit.clone()))
                                                >
                                                    {icon("edit")}
                                                </button>
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
                ModalState::Create => view! {
                    <CustomerDetails editing=None on_saved=on_saved on_close=close_modal />
                }.into_any(),
                ModalState::Edit(customer) => view! {
                    <CustomerDetails editing=Some(customer) on_saved=on_saved on_close=close_modal />
                }.into_any(),
                ModalState::ConfirmDelete(customer) => view! {
                    <ConfirmationModal
                        title="Delete Customer"
                        message=format!("Are you sure you want to delete \"{}\"? This action cannot be undone.", customer.name)
                        pending=Signal::derive(move || customers.with(|s| s.is_pending(Operation::Delete)))
                        on_confirm=confirm_delete
                        on_close=close_modal
                    />
                }.into_any(),
                ModalState::Closed => ().into_any(),
            }}
        </div>
    }
}
