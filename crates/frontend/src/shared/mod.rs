pub mod api;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod resource_store;
pub mod toast;

#[cfg(test)]
pub mod testing;
