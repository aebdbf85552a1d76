use std::rc::Rc;

use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_dish::aggregate::Dish;
use contracts::domain::a003_order::aggregate::Order;
use contracts::domain::common::Entity;
use leptos::prelude::*;

use crate::shared::api::{FallbackProvider, GlooTransport, HttpTransport, ResourceClient};
use crate::shared::config::AppConfig;
use crate::shared::resource_store::{ResourceState, ResourceStore};
use crate::shared::toast::ToastState;

/// Store backed by a signal so views re-render when it changes
pub type SignalStore<T> = ResourceStore<T, RwSignal<ResourceState<T>>>;

/// Application-wide state shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<AppConfig>,
    transport: StoredValue<Rc<dyn HttpTransport>, LocalStorage>,
    pub customers: RwSignal<ResourceState<Customer>>,
    pub dishes: RwSignal<ResourceState<Dish>>,
    pub orders: RwSignal<ResourceState<Order>>,
    pub toast: RwSignal<ToastState>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self::with_transport(config, Rc::new(GlooTransport))
    }

    pub fn with_transport(config: AppConfig, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            config: StoredValue::new(config),
            transport: StoredValue::new_local(transport),
            customers: RwSignal::new(ResourceState::default()),
            dishes: RwSignal::new(ResourceState::default()),
            orders: RwSignal::new(ResourceState::default()),
            toast: RwSignal::new(ToastState::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(AppConfig::page_size)
    }

    pub fn toast_duration_ms(&self) -> u32 {
        self.config.with_value(|c| c.toast.duration_ms)
    }

    /// Store for one resource writing into `state`
    pub fn store<T>(
        &self,
        state: RwSignal<ResourceState<T>>,
        fallback: Rc<dyn FallbackProvider<T>>,
    ) -> SignalStore<T>
    where
        T: Entity + Send + Sync + 'static,
    {
        let client = self
            .config
            .with_value(|config| ResourceClient::new(config, self.transport.get_value(), fallback));
        ResourceStore::new(client, state)
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided")
}
