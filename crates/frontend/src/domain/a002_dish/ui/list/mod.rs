pub mod state;

use self::state::create_state;
use crate::domain::a002_dish::api::dish_store;
use crate::domain::a002_dish::ui::details::DishDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::components::page_header::{FallbackBanner, PageHeader};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::{ActiveBadge, Badge, BadgeVariant};
use crate::shared::format::format_cents;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ActiveFilter, SearchInput};
use crate::shared::modal::{ConfirmationModal, ModalState};
use crate::shared::resource_store::Operation;
use crate::shared::toast::{notify, CrudAction};
use contracts::domain::a002_dish::aggregate::{Dish, DishStats, DishType};
use contracts::domain::common::{Entity, EntityId};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn type_variant(dish_type: DishType) -> BadgeVariant {
    match dish_type {
        DishType::Common => BadgeVariant::Neutral,
        DishType::Special => BadgeVariant::Primary,
        DishType::Vegetarian | DishType::Vegan => BadgeVariant::Success,
        DishType::Popular => BadgeVariant::Warning,
        DishType::Other => BadgeVariant::Info,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DishList() -> impl IntoView {
    let ctx = use_global_context();
    let dishes = ctx.dishes;
    let state = create_state(ctx.page_size());
    let controller = state.controller;
    let modal = state.modal;

    Effect::new(move |_| {
        let needs_load = dishes.with_untracked(|s| !s.is_loaded() && !s.is_pending(Operation::Load));
        if needs_load {
            spawn_local(async move { dish_store(&ctx).load().await });
        }
    });

    Effect::new(move |_| {
        dishes.with(|s| controller.update(|c| c.resync(&s.items)));
    });

    let page = Memo::new(move |_| dishes.with(|s| controller.with(|c| c.derive(&s.items).to_page())));
    let stats = Memo::new(move |_| dishes.with(|s| DishStats::from_dishes(&s.items)));
    let loading = Signal::derive(move || dishes.with(|s| s.is_pending(Operation::Load)));
    let fallback_reason = Signal::derive(move || {
        dishes.with(|s| {
            s.is_fallback()
                .then(|| s.error(Operation::Load).map(str::to_string))
                .flatten()
        })
    });
    let search_term = Signal::derive(move || controller.with(|c| c.search_term().to_string()));

    let toggle_status = move |dish: Dish| {
        spawn_local(async move {
            let ok = dish_store(&ctx).toggle_status(dish.id).await;
            notify(ctx.toast, CrudAction::for_active(!dish.active), Dish::LABEL, &dish.name, ok);
        });
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(dish) = modal.with_untracked(|m| m.deleting().cloned()) else {
            return;
        };
        spawn_local(async move {
            let ok = dish_store(&ctx).delete(dish.id).await;
            notify(ctx.toast, CrudAction::Delete, Dish::LABEL, &dish.name, ok);
            modal.set(ModalState::Closed);
        });
    });

    let on_saved = Callback::new(move |id: EntityId| {
        modal.set(ModalState::Closed);
        dishes.with_untracked(|s| {
            controller.update(|c| {
                c.reveal(&s.items, id);
            })
        });
    });
    let close_modal = Callback::new(move |_: ()| modal.set(ModalState::Closed));

    view! {
        <div class="page">
            <PageHeader title="Dishes" subtitle="Menu management">
                <SearchInput
                    value=search_term
                    on_change=Callback::new(move |term: String| controller.update(|c| c.set_search(term)))
                    placeholder="Search dishes..."
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
                    "Add Dish"
                </button>
            </PageHeader>

            <FallbackBanner reason=fallback_reason />

            <div class="stat-grid">
                <StatCard
                    label="Total Dishes"
                    icon_name="dishes"
                    value=Signal::derive(move || stats.with(|s| s.total.to_string()))
                />
                <StatCard
                    label="Common Dishes"
                    icon_name="dishes"
                    tone=StatTone::Primary
                    value=Signal::derive(move || stats.with(|s| s.common.to_string()))
                />
                <StatCard
                    label="Popular Dishes"
                    icon_name="dishes"
                    tone=StatTone::Warning
                    value=Signal::derive(move || stats.with(|s| s.popular.to_string()))
                />
                <StatCard
                    label="Most Expensive"
                    icon_name="dishes"
                    tone=StatTone::Success
                    value=Signal::derive(move || {
                        stats.with(|s| {
                            s.most_expensive
                                .as_ref()
                                .map(|d| format_cents(d.price))
                                .unwrap_or_else(|| "-".to_string())
                        })
                    })
                    subtitle=Signal::derive(move || {
                        stats.with(|s| {
                            Some(
                                s.most_expensive
                                    .as_ref()
                                    .map(|d| d.name.clone())
                                    .unwrap_or_else(|| "No dishes".to_string()),
                            )
                        })
                    })
                />
            </div>

            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Dish"</th>
                            <th>"Price"</th>
                            <th>"Type"</th>
                            <th>"Status"</th>
                            <th class="text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || !loading.get() fallback=|| view! {
                            <tr><td colspan="5" class="table-message">"Loading dishes..."</td></tr>
                        }>
                            {move || {
                                let rows = page.get().rows;
                                if rows.is_empty() {
                                    return view! {
                                        <tr><td colspan="5" class="table-message">"No dishes found"</td></tr>
                                    }.into_any();
                                }
                                let term = search_term.get();
                                rows.into_iter().map(|dish| {
                                    let toggle_title = if dish.active { "Deactivate" } else { "Activate" };
                                    let for_toggle = dish.clone();
                                    let for_edit = dish.clone();
                                    let for_delete = dish.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="cell-title">{highlight_matches(&dish.name, &term)}</div>
                                                <div class="cell-subtitle">{format!("ID: #{}", dish.id)}</div>
                                            </td>
                                            <td>{format_cents(dish.price)}</td>
                                            <td>
                                                <Badge variant=type_variant(dish.dish_type)>
                                                    {dish.dish_type.label()}
                                                </Badge>
                                            </td>
                                            <td><ActiveBadge active=dish.active /></td>
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
                    <DishDetails editing=None on_saved=on_saved on_close=close_modal />
                }.into_any(),
                ModalState::Edit(dish) => view! {
                    <DishDetails editing=Some(dish) on_saved=on_saved on_close=close_modal />
                }.into_any(),
                ModalState::ConfirmDelete(dish) => view! {
                    <ConfirmationModal
                        title="Delete Dish"
                        message=format!("Are you sure you want to delete \"{}\"?", dish.name)
                        pending=Signal::derive(move || dishes.with(|s| s.is_pending(Operation::Delete)))
                        on_confirm=confirm_delete
                        on_close=close_modal
                    />
                }.into_any(),
                ModalState::Closed => ().into_any(),
            }}
        </div>
    }
}
