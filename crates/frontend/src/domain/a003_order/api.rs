use std::rc::Rc;

use contracts::domain::a003_order::aggregate::Order;

use super::mock::OrderMocks;
use crate::layout::global_context::{AppGlobalContext, SignalStore};

pub type OrderStore = SignalStore<Order>;

pub fn order_store(ctx: &AppGlobalContext) -> OrderStore {
    ctx.store(ctx.orders, Rc::new(OrderMocks))
}
