use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Activatable, Entity, EntityId, HasStatus};
use crate::shared::validation::{is_valid_email, require, FieldErrors};

// ============================================================================
// Customer type
// ============================================================================

/// Loyalty category as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    #[default]
    Normal,
    /// The API spells it "FRECUENT"
    #[serde(rename = "FRECUENT")]
    Frequent,
    #[serde(other)]
    Other,
}

impl CustomerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::Normal => "NORMAL",
            CustomerType::Frequent => "FRECUENT",
            CustomerType::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerType::Normal => "Normal",
            CustomerType::Frequent => "Frequent",
            CustomerType::Other => "Other",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Order summary embedded in a customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrderSummary {
    pub id: EntityId,
    pub total: f64,
    pub order_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub active: bool,
    #[serde(rename = "type", default)]
    pub customer_type: CustomerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<CustomerOrderSummary>>,
}

impl Customer {
    pub fn order_count(&self) -> usize {
        self.orders.as_ref().map_or(0, Vec::len)
    }

    /// Latest order by date, regardless of the order the API returned them in
    pub fn most_recent_order(&self) -> Option<&CustomerOrderSummary> {
        self.orders
            .as_ref()?
            .iter()
            .max_by_key(|order| order.order_date)
    }

    /// Form payload pre-filled from this record
    pub fn to_dto(&self) -> CustomerDto {
        CustomerDto {
            name: self.name.clone(),
            email: self.email.clone(),
            customer_type: Some(self.customer_type),
        }
    }
}

impl Entity for Customer {
    const RESOURCE: &'static str = "customer";
    const LABEL: &'static str = "customer";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl HasStatus for Customer {
    type Status = bool;
    const STATUS_PARAM: &'static str = "active";

    fn status(&self) -> bool {
        self.active
    }

    fn set_status(&mut self, status: bool) {
        self.active = status;
    }

    fn status_value(status: &bool) -> String {
        status.to_string()
    }
}

impl Activatable for Customer {
    fn is_active(&self) -> bool {
        self.active
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerDto {
    pub name: String,
    pub email: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<CustomerType>,
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name");
        if require(&mut errors, "email", &self.email, "Email") && !is_valid_email(&self.email) {
            errors.add("email", "Invalid email");
        }
        errors.into_result()
    }
}

/// Aggregate counters shown above the customer table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CustomerStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub orders: usize,
}

impl CustomerStats {
    pub fn from_customers(customers: &[Customer]) -> Self {
        let active = customers.iter().filter(|c| c.active).count();
        Self {
            total: customers.len(),
            active,
            inactive: customers.len() - active,
            orders: customers.iter().map(Customer::order_count).sum(),
        }
    }
}
