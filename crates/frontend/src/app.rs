use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Failed to load configuration, using defaults: {:#}", e);
        AppConfig::default()
    });
    log::info!("API base URL: {}", config.api.base_url);

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    view! {
        <AppRoutes />
    }
}
