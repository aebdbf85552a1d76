//! In-memory collection of one resource plus the async CRUD operations that
//! keep it in sync with the API

use std::cell::RefCell;
use std::rc::Rc;

use contracts::domain::common::{Entity, EntityId, HasStatus};
use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api::{DataSource, Fetched, ResourceClient};

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
    Status,
}

impl Operation {
    fn index(self) -> usize {
        match self {
            Operation::Load => 0,
            Operation::Create => 1,
            Operation::Update => 2,
            Operation::Delete => 3,
            Operation::Status => 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpState {
    pub pending: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    /// `None` until the first load finishes
    pub source: Option<DataSource>,
    ops: [OpState; 5],
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            source: None,
            ops: Default::default(),
        }
    }
}

impl<T> ResourceState<T> {
    pub fn op(&self, op: Operation) -> &OpState {
        &self.ops[op.index()]
    }

    fn op_mut(&mut self, op: Operation) -> &mut OpState {
        &mut self.ops[op.index()]
    }

    pub fn is_pending(&self, op: Operation) -> bool {
        self.op(op).pending
    }

    pub fn error(&self, op: Operation) -> Option<&str> {
        self.op(op).error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn is_fallback(&self) -> bool {
        self.source.as_ref().is_some_and(DataSource::is_fallback)
    }

    pub fn begin(&mut self, op: Operation) {
        let state = self.op_mut(op);
        state.pending = true;
        state.error = None;
    }

    fn succeed(&mut self, op: Operation) {
        let state = self.op_mut(op);
        state.pending = false;
        state.error = None;
    }

    pub fn fail(&mut self, op: Operation, message: impl Into<String>) {
        let state = self.op_mut(op);
        state.pending = false;
        state.error = Some(message.into());
    }

    /// Replaces the collection; a fallback load keeps the failure reason
    pub fn finish_load(&mut self, fetched: Fetched<Vec<T>>) {
        self.items = fetched.data;
        match &fetched.source {
            DataSource::Remote => self.succeed(Operation::Load),
            DataSource::Fallback { reason } => self.fail(Operation::Load, reason.clone()),
        }
        self.source = Some(fetched.source);
    }

    pub fn apply_created(&mut self, item: T) {
        self.items.push(item);
        self.succeed(Operation::Create);
    }
}

impl<T: Entity> ResourceState<T> {
    pub fn find(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Shallow-merges the response object into the item with `id`
    pub fn apply_updated(&mut self, id: EntityId, response: &Value) -> Result<(), String> {
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            // Nothing local to merge into
            self.succeed(Operation::Update);
            return Ok(());
        };

        match merge_fields(&self.items[index], response) {
            Ok(merged) => {
                self.items[index] = merged;
                self.succeed(Operation::Update);
                Ok(())
            }
            Err(message) => {
                self.fail(Operation::Update, message.clone());
                Err(message)
            }
        }
    }

    /// Keeps a record fetched on its own so later mutations have a local
    /// copy to update; an existing entry with the same id wins
    pub fn remember(&mut self, item: T) {
        if self.find(item.id()).is_none() {
            self.items.push(item);
        }
    }

    pub fn apply_deleted(&mut self, id: EntityId) {
        self.items.retain(|item| item.id() != id);
        self.succeed(Operation::Delete);
    }
}

impl<T: HasStatus> ResourceState<T> {
    /// Sets the status locally; the PATCH response is never consulted
    pub fn apply_status(&mut self, id: EntityId, status: T::Status) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
            item.set_status(status);
        }
        self.succeed(Operation::Status);
    }
}

/// Top-level fields of `response` overwrite those of `item`; everything else
/// is preserved. A non-object response leaves the item unchanged.
pub fn merge_fields<T: Entity>(item: &T, response: &Value) -> Result<T, String> {
    let Value::Object(patch) = response else {
        return Ok(item.clone());
    };

    let mut current = serde_json::to_value(item).map_err(|e| e.to_string())?;
    if let Value::Object(fields) = &mut current {
        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(current).map_err(|e| format!("Failed to merge response: {}", e))
}

// ============================================================================
// Storage seam
// ============================================================================

/// Shared mutable cell the store writes into.
///
/// Returns `None` when the cell is gone (a disposed signal).
pub trait StateCell<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
}

impl<S: Send + Sync + 'static> StateCell<S> for RwSignal<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<S> StateCell<S> for Rc<RefCell<S>> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

// ============================================================================
// Store
// ============================================================================

/// Runs one request per call and mutates the collection only on success
pub struct ResourceStore<T: Entity, S> {
    client: ResourceClient<T>,
    state: S,
}

impl<T: Entity, S: Clone> Clone for ResourceStore<T, S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T, S> ResourceStore<T, S>
where
    T: Entity,
    S: StateCell<ResourceState<T>>,
{
    pub fn new(client: ResourceClient<T>, state: S) -> Self {
        Self { client, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn client(&self) -> &ResourceClient<T> {
        &self.client
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.state.read(|s| s.items.clone()).unwrap_or_default()
    }

    pub async fn load(&self) {
        self.state.write(|s| s.begin(Operation::Load));
        let fetched = self.client.list().await;
        self.state.write(|s| s.finish_load(fetched));
    }

    /// Local record first, then `GET {endpoint}/{id}` with mock fallback.
    /// A fetched record is kept in the collection until the next load.
    pub async fn get(&self, id: EntityId) -> Option<T> {
        if let Some(found) = self.state.read(|s| s.find(id).cloned()).flatten() {
            return Some(found);
        }
        let fetched = self.client.get(id).await?;
        self.state.write(|s| s.remember(fetched.clone()));
        Some(fetched)
    }

    pub async fn create<D: Serialize>(&self, draft: &D) -> Option<T> {
        self.state.write(|s| s.begin(Operation::Create));
        match self.client.create(draft).await {
            Ok(created) => {
                self.state.write(|s| s.apply_created(created.clone()));
                Some(created)
            }
            Err(e) => {
                self.state.write(|s| s.fail(Operation::Create, e.to_string()));
                None
            }
        }
    }

    pub async fn update<P: Serialize>(&self, id: EntityId, patch: &P) -> bool {
        self.state.write(|s| s.begin(Operation::Update));
        match self.client.update(id, patch).await {
            Ok(response) => self
                .state
                .write(|s| s.apply_updated(id, &response).is_ok())
                .unwrap_or(false),
            Err(e) => {
                self.state.write(|s| s.fail(Operation::Update, e.to_string()));
                false
            }
        }
    }

    pub async fn delete(&self, id: EntityId) -> bool {
        self.state.write(|s| s.begin(Operation::Delete));
        match self.client.delete(id).await {
            Ok(()) => {
                self.state.write(|s| s.apply_deleted(id));
                true
            }
            Err(e) => {
                self.state.write(|s| s.fail(Operation::Delete, e.to_string()));
                false
            }
        }
    }
}

impl<T, S> ResourceStore<T, S>
where
    T: HasStatus,
    S: StateCell<ResourceState<T>>,
{
    pub async fn set_status(&self, id: EntityId, status: T::Status) -> bool {
        self.state.write(|s| s.begin(Operation::Status));
        match self.client.set_status(id, &status).await {
            Ok(()) => {
                self.state.write(|s| s.apply_status(id, status));
                true
            }
            Err(e) => {
                self.state.write(|s| s.fail(Operation::Status, e.to_string()));
                false
            }
        }
    }
}

impl<T, S> ResourceStore<T, S>
where
    T: HasStatus<Status = bool>,
    S: StateCell<ResourceState<T>>,
{
    /// Negates the local item's current flag
    pub async fn toggle_status(&self, id: EntityId) -> bool {
        let current = self
            .state
            .read(|s| s.find(id).map(|item| item.status()))
            .flatten();

        match current {
            Some(active) => self.set_status(id, !active).await,
            None => {
                self.state.write(|s| {
                    s.fail(Operation::Status, format!("{} {} not found", T::LABEL, id))
                });
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::mock::CustomerMocks;
    use crate::domain::a002_dish::mock::DishMocks;
    use crate::domain::a003_order::mock::OrderMocks;
    use crate::shared::api::{ApiError, FallbackProvider, Method};
    use crate::shared::config::AppConfig;
    use crate::shared::list_utils::{ActiveFilter, ListController};
    use crate::shared::testing::FakeTransport;
    use contracts::domain::a001_customer::aggregate::Customer;
    use contracts::domain::a002_dish::aggregate::Dish;
    use contracts::domain::a003_order::aggregate::{Order, OrderStatus};
    use serde_json::json;

    type Cell<T> = Rc<RefCell<ResourceState<T>>>;

    fn store<T: Entity + 'static>(
        transport: &Rc<FakeTransport>,
        fallback: Rc<dyn FallbackProvider<T>>,
    ) -> ResourceStore<T, Cell<T>> {
        let client = ResourceClient::new(&AppConfig::default(), transport.clone(), fallback);
        ResourceStore::new(client, Rc::new(RefCell::new(ResourceState::default())))
    }

    fn customer_json(id: i64, name: &str, active: bool) -> Value {
        json!({
            "id": id,
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "active": active,
            "type": "NORMAL"
        })
    }

    async fn loaded_customers(transport: &Rc<FakeTransport>) -> ResourceStore<Customer, Cell<Customer>> {
        transport.respond(json!([
            customer_json(1, "Ana", true),
            customer_json(2, "Lucas", true),
            customer_json(3, "Juan", false),
        ]));
        let store = store(transport, Rc::new(CustomerMocks));
        store.load().await;
        store
    }

    #[tokio::test]
    async fn test_load_replaces_collection() {
        let transport = Rc::new(FakeTransport::new());
        let store = loaded_customers(&transport).await;

        let state = store.state().borrow();
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.source, Some(DataSource::Remote));
        assert_eq!(state.op(Operation::Load), &OpState::default());
    }

    #[tokio::test]
    async fn test_load_failure_falls_back_to_mocks() {
        let transport = Rc::new(FakeTransport::new());
        transport.fail(ApiError::Status {
            status: 500,
            text: "Internal Server Error".into(),
        });
        let store = store(&transport, Rc::new(CustomerMocks));
        store.load().await;

        let state = store.state().borrow();
        assert_eq!(state.items, CustomerMocks.items());
        assert!(state.is_fallback());
        assert!(!state.is_pending(Operation::Load));
        assert_eq!(state.error(Operation::Load), Some("HTTP error: 500 Internal Server Error"));
    }

    #[tokio::test]
    async fn test_create_appends_and_is_reachable() {
        let transport = Rc::new(FakeTransport::new());
        let store = loaded_customers(&transport).await;
        transport.respond(customer_json(99, "Nueva", true));

        let created = store
            .create(&json!({"name": "Nueva", "email": "nueva@example.com"}))
            .await;
        assert_eq!(created.map(|c| c.id), Some(99));

        let items = store.snapshot();
        assert_eq!(items.len(), 4);

        let mut controller: ListController<ActiveFilter> = ListController::new(2);
        assert!(!controller.derive(&items).page_items.iter().any(|c| c.id == 99));
        assert!(controller.reveal(&items, 99));
        assert_eq!(controller.current_page(), 2);
        assert!(controller.derive(&items).page_items.iter().any(|c| c.id == 99));
    }

    #[tokio::test]
    async fn test_create_failure_leaves_collection() {
        let transport = Rc::new(FakeTransport::new());
        let store = loaded_customers(&transport).await;
        transport.fail(ApiError::Network("offline".into()));

        assert!(store.create(&json!({"name": "X"})).await.is_none());
        let state = store.state().borrow();
        assert_eq!(state.items.len(), 3);
        assert!(state.error(Operation::Create).is_some());
        assert!(!state.is_pending(Operation::Create));
    }

    #[tokio::test]
    async fn test_update_merges_returned_fields() {
        let transport = Rc::new(FakeTransport::new());
        let store = loaded_customers(&transport).await;
        transport.respond(json!({"id": 2, "name": "Lucas B"}));

        assert!(store.update(2, &json!({"name": "Lucas B"})).await);
        let state = store.state().borrow();
        let lucas = state.find(2).cloned();
        assert_eq!(lucas.as_ref().map(|c| c.name.as_str()), Some("Lucas B"));
        assert_eq!(lucas.map(|c| c.email), Some("lucas@example.com".to_string()));
        assert_eq!(state.items.len(), 3);
    }

    #[tokio::test]
    async fn test_update_failure_leaves_item() {
        let transport = Rc::new(FakeTransport::new());
        let store = loaded_customers(&transport).await;
        transport.fail(ApiError::Status {
            status: 400,
            text: "Bad Request".into(),
        });

        assert!(!store.update(2, &json!({"name": "Lucas B"})).await);
        let state = store.state().borrow();
        assert_eq!(state.find(2).map(|c| c.name.as_str()), Some("Lucas"));
        assert!(state.error(Operation::Update).is_some());
    }

    #[tokio::test]
    async fn test_update_with_empty_body_keeps_item() {
        let transport = Rc::new(FakeTransport::new());
        let store = loaded_customers(&transport).await;
        transport.respond(Value::Null);

        assert!(store.update(1, &json!({"name": "Ana"})).await);
        assert_eq!(store.state().borrow().find(1).map(|c| c.name.as_str()), Some("Ana"));
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let transport = Rc::new(FakeTransport::new());
        let store = loaded_customers(&transport).await;
        transport.respond(Value::Null);

        assert!(store.delete(2).await);
        let ids: Vec<_> = store.snapshot().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);

        transport.fail(ApiError::Network("offline".into()));
        assert!(!store.delete(1).await);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[tokio::test]
    async fn test_toggle_status_flips_locally() {
        let transport = Rc::new(FakeTransport::new());
        let store = loaded_customers(&transport).await;
        // The PATCH returns an unrelated body which must be ignored
        transport.respond(json!({"active": true}));

        assert!(store.toggle_status(1).await);
        assert_eq!(store.state().borrow().find(1).map(|c| c.active), Some(false));

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].method, Method::Patch);
        assert!(sent[1].url.ends_with("/customer/1/status?active=false"));
    }

    #[tokio::test]
    async fn test_toggle_status_unknown_id() {
        let transport = Rc::new(FakeTransport::new());
        let store = loaded_customers(&transport).await;

        assert!(!store.toggle_status(42).await);
        assert_eq!(transport.requests().len(), 1);
        assert!(store.state().borrow().error(Operation::Status).is_some());
    }

    #[tokio::test]
    async fn test_offline_status_for_customers_is_refused() {
        let transport = Rc::new(FakeTransport::new());
        let store = store(&transport, Rc::new(CustomerMocks));
        store.load().await;

        assert!(!store.toggle_status(57).await);
        assert_eq!(store.state().borrow().find(57).map(|c| c.active), Some(true));
    }

    #[tokio::test]
    async fn test_offline_status_for_dishes_is_applied() {
        let transport = Rc::new(FakeTransport::new());
        let store: ResourceStore<Dish, Cell<Dish>> = store(&transport, Rc::new(DishMocks));
        store.load().await;

        assert!(store.toggle_status(3).await);
        assert_eq!(store.state().borrow().find(3).map(|d| d.active), Some(true));
    }

    #[tokio::test]
    async fn test_order_status_and_get_fallback() {
        let transport = Rc::new(FakeTransport::new());
        let store: ResourceStore<Order, Cell<Order>> = store(&transport, Rc::new(OrderMocks));

        // Not loaded yet: GET fails and the mock record is used
        let order = store.get(2).await;
        assert_eq!(order.map(|o| o.customer.name), Some("Lucas".to_string()));

        store.load().await;
        assert!(store.set_status(1, OrderStatus::Ready).await);
        assert_eq!(
            store.state().borrow().find(1).map(|o| o.status.clone()),
            Some(OrderStatus::Ready)
        );
        assert!(transport
            .requests()
            .last()
            .is_some_and(|r| r.url.ends_with("/order/1/status?status=READY")));
    }

    #[tokio::test]
    async fn test_status_change_after_get_on_unloaded_store() {
        let transport = Rc::new(FakeTransport::new());
        let store: ResourceStore<Order, Cell<Order>> = store(&transport, Rc::new(OrderMocks));

        let order = store.get(2).await;
        assert_eq!(order.map(|o| o.status), Some(OrderStatus::Delivered));
        assert!(!store.state().borrow().is_loaded());

        assert!(store.set_status(2, OrderStatus::Cancelled).await);
        assert_eq!(
            store.state().borrow().find(2).map(|o| o.status),
            Some(OrderStatus::Cancelled)
        );
        assert_eq!(store.get(2).await.map(|o| o.status), Some(OrderStatus::Cancelled));

        // A later load still replaces the collection
        transport.respond(json!([]));
        store.load().await;
        assert!(store.state().borrow().find(2).is_none());
    }

    #[test]
    fn test_remember_keeps_existing_entry() {
        let mut state: ResourceState<Customer> = ResourceState::default();
        let ana: Customer = serde_json::from_value(customer_json(5, "Ana", true)).unwrap();
        let renamed: Customer = serde_json::from_value(customer_json(5, "Other", true)).unwrap();
        state.remember(ana.clone());
        state.remember(renamed);
        assert_eq!(state.items, vec![ana]);
    }

    #[test]
    fn test_merge_fields_ignores_non_objects() {
        let customer: Customer = serde_json::from_value(customer_json(5, "Ana", true)).unwrap();
        assert_eq!(merge_fields(&customer, &json!([1, 2])), Ok(customer.clone()));
        assert!(merge_fields(&customer, &json!({"active": "yes"})).is_err());
    }
}
