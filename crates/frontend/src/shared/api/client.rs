use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::rc::Rc;

use contracts::domain::common::{Entity, EntityId, HasStatus};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::transport::{ApiError, ApiRequest, HttpTransport, Method};
use crate::shared::config::AppConfig;

// ============================================================================
// Fallback
// ============================================================================

/// Fixed dataset used when the API cannot be reached
pub trait FallbackProvider<T: Entity> {
    fn items(&self) -> Vec<T>;

    fn find(&self, id: EntityId) -> Option<T> {
        self.items().into_iter().find(|item| item.id() == id)
    }

    /// Whether a failed status PATCH may still be applied locally
    fn accepts_offline_status(&self, _id: EntityId) -> bool {
        false
    }
}

/// Where the current collection came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Fallback { reason: String },
}

impl DataSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DataSource::Fallback { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<D> {
    pub data: D,
    pub source: DataSource,
}

// ============================================================================
// Client
// ============================================================================

/// REST client for one resource at `{base}/{resource}`
pub struct ResourceClient<T: Entity> {
    endpoint: String,
    transport: Rc<dyn HttpTransport>,
    fallback: Rc<dyn FallbackProvider<T>>,
    _marker: PhantomData<T>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            transport: Rc::clone(&self.transport),
            fallback: Rc::clone(&self.fallback),
            _marker: PhantomData,
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(
        config: &AppConfig,
        transport: Rc<dyn HttpTransport>,
        fallback: Rc<dyn FallbackProvider<T>>,
    ) -> Self {
        Self {
            endpoint: config.endpoint(T::RESOURCE),
            transport,
            fallback,
            _marker: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn item_url(&self, id: EntityId) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// `GET {endpoint}`; never fails, substitutes the fallback dataset instead
    pub async fn list(&self) -> Fetched<Vec<T>> {
        let result = self
            .transport
            .send(ApiRequest::get(self.endpoint.clone()))
            .await
            .and_then(decode::<Vec<T>>);

        match result {
            Ok(data) => {
                log::info!("{} data received: {} records", T::LABEL, data.len());
                Fetched {
                    data,
                    source: DataSource::Remote,
                }
            }
            Err(e) => {
                log::error!("Error fetching {} list: {}", T::LABEL, e);
                log::warn!("Using mock {} data instead", T::LABEL);
                Fetched {
                    data: self.fallback.items(),
                    source: DataSource::Fallback {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    /// `GET {endpoint}/{id}`, falling back to the mock record with that id
    pub async fn get(&self, id: EntityId) -> Option<T> {
        let result = self
            .transport
            .send(ApiRequest::get(self.item_url(id)))
            .await
            .and_then(decode::<T>);

        match result {
            Ok(item) => Some(item),
            Err(e) => {
                log::error!("Error fetching {} {}: {}", T::LABEL, id, e);
                let found = self.fallback.find(id);
                if found.is_some() {
                    log::warn!("Using mock {} {} instead", T::LABEL, id);
                }
                found
            }
        }
    }

    /// `POST {endpoint}`
    pub async fn create<D: Serialize>(&self, draft: &D) -> Result<T, ApiError> {
        let body = encode(draft)?;
        let result = self
            .transport
            .send(ApiRequest::with_body(
                Method::Post,
                self.endpoint.clone(),
                body,
            ))
            .await
            .and_then(decode::<T>);

        match &result {
            Ok(created) => log::info!("{} created: {}", T::LABEL, created.id()),
            Err(e) => log::error!("Error creating {}: {}", T::LABEL, e),
        }
        result
    }

    /// `PUT {endpoint}/{id}`; returns the raw response object so the caller
    /// can merge only the fields the server sent back
    pub async fn update<P: Serialize>(&self, id: EntityId, patch: &P) -> Result<Value, ApiError> {
        let body = encode(patch)?;
        let result = self
            .transport
            .send(ApiRequest::with_body(Method::Put, self.item_url(id), body))
            .await;

        match &result {
            Ok(_) => log::info!("{} {} updated", T::LABEL, id),
            Err(e) => log::error!("Error updating {} {}: {}", T::LABEL, id, e),
        }
        result
    }

    /// `DELETE {endpoint}/{id}`
    pub async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        let result = self
            .transport
            .send(ApiRequest::delete(self.item_url(id)))
            .await
            .map(|_| ());

        match &result {
            Ok(()) => log::info!("{} {} deleted", T::LABEL, id),
            Err(e) => log::error!("Error deleting {} {}: {}", T::LABEL, id, e),
        }
        result
    }
}

impl<T: HasStatus> ResourceClient<T> {
    pub fn status_url(&self, id: EntityId, status: &T::Status) -> Result<String, ApiError> {
        let mut params = BTreeMap::new();
        params.insert(T::STATUS_PARAM, T::status_value(status));
        let query = serde_qs::to_string(&params).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(format!("{}/status?{}", self.item_url(id), query))
    }

    /// `PATCH {endpoint}/{id}/status?{param}={value}`; the response body is ignored
    pub async fn set_status(&self, id: EntityId, status: &T::Status) -> Result<(), ApiError> {
        let url = self.status_url(id, status)?;
        match self.transport.send(ApiRequest::patch(url)).await {
            Ok(_) => {
                log::info!("{} {} status changed", T::LABEL, id);
                Ok(())
            }
            Err(e) if self.fallback.accepts_offline_status(id) => {
                log::warn!(
                    "Error changing {} {} status ({}), applying to mock data",
                    T::LABEL,
                    id,
                    e
                );
                Ok(())
            }
            Err(e) => {
                log::error!("Error changing {} {} status: {}", T::LABEL, id, e);
                Err(e)
            }
        }
    }
}

fn encode<D: Serialize>(value: &D) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<D: DeserializeOwned>(value: Value) -> Result<D, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
