use contracts::domain::a002_dish::aggregate::{Dish, DishForm};
use contracts::domain::common::{Entity, EntityId};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_dish::api::dish_store;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::toast::{notify, CrudAction};

#[derive(Clone, Copy)]
pub struct DishDetailsViewModel {
    pub form: RwSignal<DishForm>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    editing_id: Option<EntityId>,
}

impl DishDetailsViewModel {
    pub fn new(editing: Option<&Dish>) -> Self {
        Self {
            form: RwSignal::new(editing.map(DishForm::from_dish).unwrap_or_default()),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            editing_id: editing.map(|d| d.id),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn save_command(&self, ctx: AppGlobalContext, on_saved: Callback<EntityId>) {
        let dto = match self.form.with_untracked(DishForm::to_dto) {
            Ok(dto) => dto,
            Err(errors) => {
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(FieldErrors::new());

        let saving = self.saving;
        let editing_id = self.editing_id;
        saving.set(true);

        spawn_local(async move {
            let store = dish_store(&ctx);
            let (action, saved_id) = match editing_id {
                Some(id) => {
                    let ok = store.update(id, &dto).await;
                    (CrudAction::Update, ok.then_some(id))
                }
                None => {
                    let created = store.create(&dto).await;
                    (CrudAction::Create, created.map(|d| d.id))
                }
            };

            saving.set(false);
            notify(ctx.toast, action, Dish::LABEL, &dto.name, saved_id.is_some());
            if let Some(id) = saved_id {
                on_saved.run(id);
            }
        });
    }
}
