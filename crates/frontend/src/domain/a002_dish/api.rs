use std::rc::Rc;

use contracts::domain::a002_dish::aggregate::Dish;

use super::mock::DishMocks;
use crate::layout::global_context::{AppGlobalContext, SignalStore};

pub type DishStore = SignalStore<Dish>;

pub fn dish_store(ctx: &AppGlobalContext) -> DishStore {
    ctx.store(ctx.dishes, Rc::new(DishMocks))
}
