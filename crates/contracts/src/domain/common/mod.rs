//! Common types and traits for all resources

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Numeric identifier assigned by the REST API
pub type EntityId = i64;

/// A record managed through a `{base}/{resource}` REST endpoint
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Endpoint segment, e.g. "customer"
    const RESOURCE: &'static str;

    /// Human readable singular name used in messages
    const LABEL: &'static str;

    fn id(&self) -> EntityId;

    /// Field shown in tables, toasts and used for search
    fn display_name(&self) -> &str;
}

/// Entity with a status that can be changed through
/// `PATCH {endpoint}/{id}/status?{param}={value}`
pub trait HasStatus: Entity {
    type Status: Clone + PartialEq;

    /// Query parameter name ("active" or "status")
    const STATUS_PARAM: &'static str;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);

    /// Value as it appears in the query string
    fn status_value(status: &Self::Status) -> String;
}

/// Entities whose status is a plain active/inactive flag
pub trait Activatable {
    fn is_active(&self) -> bool;
}
