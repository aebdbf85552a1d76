use std::rc::Rc;

use contracts::domain::a001_customer::aggregate::Customer;

use super::mock::CustomerMocks;
use crate::layout::global_context::{AppGlobalContext, SignalStore};

pub type CustomerStore = SignalStore<Customer>;

/// Customer store bound to the shared customer collection
pub fn customer_store(ctx: &AppGlobalContext) -> CustomerStore {
    ctx.store(ctx.customers, Rc::new(CustomerMocks))
}
