pub mod api;
pub mod mock;
pub mod ui;

use contracts::domain::a002_dish::aggregate::Dish;

use crate::shared::list_utils::{contains_ignore_case, Searchable};

impl Searchable for Dish {
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(&self.name, term)
    }
}
