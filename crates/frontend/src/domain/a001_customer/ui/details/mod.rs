//! Customer create / edit form
//!
//! - view_model.rs: form state, validation and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CustomerDetails;
pub use view_model::CustomerDetailsViewModel;
