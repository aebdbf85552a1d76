//! Dish create / edit form (MVVM: view_model.rs + view.rs)

mod view;
mod view_model;

pub use view::DishDetails;
pub use view_model::DishDetailsViewModel;
