use super::view_model::DishDetailsViewModel;
use crate::layout::global_context::use_global_context;
use crate::shared::components::ui::{SelectField, TextField};
use crate::shared::modal::Modal;
use contracts::domain::a002_dish::aggregate::{Dish, DishType};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
pub fn DishDetails(
    editing: Option<Dish>,
    on_saved: Callback<EntityId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let vm = DishDetailsViewModel::new(editing.as_ref());
    let title = if vm.is_edit_mode() { "Edit Dish" } else { "New Dish" };

    let type_options = DishType::ALL
        .into_iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect::<Vec<_>>();

    let submit = move || vm.save_command(ctx, on_saved);

    view! {
        <Modal
            title=title.to_string()
            on_close=on_close
            footer=move || view! {
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                    on:click=move |_| submit()
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
            }
        >
            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <TextField
                    label="Name"
                    id="name"
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                    error=vm.field_error("name")
                    placeholder="Dish name"
                />
                <TextField
                    label="Price"
                    id="price"
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| f.price.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.price = v))
                    error=vm.field_error("price")
                    placeholder="0.00"
                />
                <SelectField
                    label="Type"
                    id="type"
                    value=Signal::derive(move || vm.form.with(|f| f.dish_type.clone()))
                    on_change=Callback::new(move |v: String| vm.form.update(|f| f.dish_type = v))
                    options=type_options
                    error=vm.field_error("type")
                    placeholder="Select a type"
                />
            </form>
        </Modal>
    }
}
