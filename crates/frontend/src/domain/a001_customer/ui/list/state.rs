use contracts::domain::a001_customer::aggregate::Customer;
use leptos::prelude::*;

use crate::shared::list_utils::{ActiveFilter, ListController};
use crate::shared::modal::ModalState;

#[derive(Clone, Copy)]
pub struct CustomerListState {
    pub controller: RwSignal<ListController<ActiveFilter>>,
    pub modal: RwSignal<ModalState<Customer>>,
}

pub fn create_state(page_size: usize) -> CustomerListState {
    CustomerListState {
        controller: RwSignal::new(ListController::new(page_size)),
        modal: RwSignal::new(ModalState::Closed),
    }
}
