use contracts::domain::a002_dish::aggregate::Dish;
use leptos::prelude::*;

use crate::shared::list_utils::{ActiveFilter, ListController};
use crate::shared::modal::ModalState;

#[derive(Clone, Copy)]
pub struct DishListState {
    pub controller: RwSignal<ListController<ActiveFilter>>,
    pub modal: RwSignal<ModalState<Dish>>,
}

pub fn create_state(page_size: usize) -> DishListState {
    DishListState {
        controller: RwSignal::new(ListController::new(page_size)),
        modal: RwSignal::new(ModalState::Closed),
    }
}
