use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use contracts::domain::common::{Entity, EntityId};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_customer::api::customer_store;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::toast::{notify, CrudAction};

/// ViewModel for the customer form
#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    editing_id: Option<EntityId>,
}

impl CustomerDetailsViewModel {
    pub fn new(editing: Option<&Customer>) -> Self {
        Self {
            form: RwSignal::new(editing.map(Customer::to_dto).unwrap_or_default()),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            editing_id: editing.map(|c| c.id),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Validates, then creates or updates; `on_saved` receives the id on success
    pub fn save_command(&self, ctx: AppGlobalContext, on_saved: Callback<EntityId>) {
        let dto = self.form.get_untracked();
        if let Err(errors) = dto.validate() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(FieldErrors::new());

        let saving = self.saving;
        let editing_id = self.editing_id;
        saving.set(true);

        spawn_local(async move {
            let store = customer_store(&ctx);
            let (action, saved_id) = match editing_id {
                Some(id) => {
                    let ok = store.update(id, &dto).await;
                    (CrudAction::Update, ok.then_some(id))
                }
                None => {
                    let created = store.create(&dto).await;
                    (CrudAction::Create, created.map(|c| c.id))
                }
            };

            saving.set(false);
            notify(ctx.toast, action, Customer::LABEL, &dto.name, saved_id.is_some());
            if let Some(id) = saved_id {
                on_saved.run(id);
            }
        });
    }
}
