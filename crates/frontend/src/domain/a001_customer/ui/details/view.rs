use super::view_model::CustomerDetailsViewModel;
use crate::layout::global_context::use_global_context;
use crate::shared::components::ui::{SelectField, TextField};
use crate::shared::modal::Modal;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerType};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
pub fn CustomerDetails(
    /// Customer to edit; `None` opens an empty create form
    editing: Option<Customer>,
    on_saved: Callback<EntityId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let vm = CustomerDetailsViewModel::new(editing.as_ref());
    let title = if vm.is_edit_mode() { "Edit Customer" } else { "New Customer" };

    let type_options = [CustomerType::Normal, CustomerType::Frequent]
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
                    placeholder="Customer name"
                />
                <TextField
                    label="Email"
                    id="email"
                    input_type="email"
                    value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.email = v))
                    error=vm.field_error("email")
                    placeholder="name@example.com"
                />
                <SelectField
                    label="Type"
                    id="type"
                    value=Signal::derive(move || {
                        vm.form.with(|f| f.customer_type.unwrap_or_default().as_str().to_string())
                    })
                    on_change=Callback::new(move |v: String| {
                        let customer_type = match v.as_str() {
                            "FRECUENT" => CustomerType::Frequent,
                            _ => CustomerType::Normal,
                        };
                        vm.form.update(|f| f.customer_type = Some(customer_type));
                    })
                    options=type_options
                    error=vm.field_error("type")
                />
            </form>
        </Modal>
    }
}
