use contracts::domain::a003_order::aggregate::Order;
use leptos::prelude::*;

use crate::domain::a003_order::StatusFilter;
use crate::shared::list_utils::ListController;
use crate::shared::modal::ModalState;

#[derive(Clone, Copy)]
pub struct OrderListState {
    pub controller: RwSignal<ListController<StatusFilter>>,
    pub modal: RwSignal<ModalState<Order>>,
}

pub fn create_state(page_size: usize) -> OrderListState {
    OrderListState {
        controller: RwSignal::new(ListController::new(page_size)),
        modal: RwSignal::new(ModalState::Closed),
    }
}
