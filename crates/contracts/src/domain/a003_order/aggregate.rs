use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_customer::aggregate::Customer;
use crate::domain::a002_dish::aggregate::Dish;
use crate::domain::common::{Entity, EntityId, HasStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<OrderStatus> {
        OrderStatus::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Dish line inside an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: EntityId,
    pub dish: Dish,
    pub quantity: u32,
    pub unit_price: f64,
    #[serde(default)]
    pub special_notes: Option<String>,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    pub customer: Customer,
    pub total: f64,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of the item lines; may differ from `total` reported by the API
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

impl Entity for Order {
    const RESOURCE: &'static str = "order";
    const LABEL: &'static str = "order";

    fn id(&self) -> EntityId {
        self.id
    }

    /// Orders are identified on screen by the customer who placed them
    fn display_name(&self) -> &str {
        &self.customer.name
    }
}

impl HasStatus for Order {
    type Status = OrderStatus;
    const STATUS_PARAM: &'static str = "status";

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    fn status_value(status: &OrderStatus) -> String {
        status.as_str().to_string()
    }
}

// ============================================================================
// DTOs
// ============================================================================
//
// Request bodies of `POST /order` and `PUT /order/{id}`. The dashboard only
// changes order status, but the payload shapes belong to the API contract.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub dish_id: EntityId,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_notes: Option<String>,
}

/// Create payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub customer_id: EntityId,
    pub items: Vec<OrderItemDto>,
}

/// Update payload, every field optional
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItemDto>>,
}

/// Aggregate counters shown above the order table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub preparing: usize,
    pub delivered: usize,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();
        Self {
            total: orders.len(),
            pending: count(OrderStatus::Pending),
            preparing: count(OrderStatus::Preparing),
            delivered: count(OrderStatus::Delivered),
        }
    }
}

/// Orders sorted newest first
pub fn latest_orders(orders: &[Order], limit: usize) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{
        "id": 2,
        "customer": {"id":57,"name":"Lucas","email":"lucas@example.com","active":true,"type":"NORMAL"},
        "total": 4000,
        "status": "DELIVERED",
        "orderDate": "2023-10-14T18:45:00Z",
        "items": [
            {"id":3,"dish":{"id":4,"name":"Ensalada Mediterránea","price":1800,"type":"STARTER","active":true},
             "unitPrice":1800,"quantity":2,"specialNotes":null},
            {"id":4,"dish":{"id":1,"name":"Tiramisú a la Criolla","price":1500,"type":"DESSERT","active":true},
             "unitPrice":1500,"quantity":1,"specialNotes":"no sugar"}
        ]
    }"#;

    #[test]
    fn test_decode_nested_order() {
        let order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.customer.name, "Lucas");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[1].special_notes.as_deref(), Some("no sugar"));
        assert_eq!(order.items_total(), 5100.0);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.display_name(), "Lucas");
    }

    #[test]
    fn test_status_query_value() {
        assert_eq!(Order::status_value(&OrderStatus::Preparing), "PREPARING");
        assert_eq!(OrderStatus::parse("ready"), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::parse("LOST"), None);
    }

    #[test]
    fn test_create_dto_wire_shape() {
        let dto = OrderDto {
            customer_id: 56,
            items: vec![OrderItemDto { dish_id: 1, quantity: 2, special_notes: None }],
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({"customerId": 56, "items": [{"dishId": 1, "quantity": 2}]})
        );
    }

    #[test]
    fn test_update_dto_only_sends_present_fields() {
        let dto = OrderUpdateDto {
            customer_id: Some(57),
            items: None,
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({"customerId": 57})
        );
    }

    #[test]
    fn test_stats_and_latest() {
        let base: Order = serde_json::from_str(ORDER_JSON).unwrap();
        let mut older = base.clone();
        older.id = 1;
        older.status = OrderStatus::Pending;
        older.order_date = "2023-10-01T10:00:00Z".parse().unwrap();
        let mut newer = base.clone();
        newer.id = 3;
        newer.status = OrderStatus::Preparing;
        newer.order_date = "2023-10-20T10:00:00Z".parse().unwrap();

        let orders = vec![older, base, newer];
        let stats = OrderStats::from_orders(&orders);
        assert_eq!(stats, OrderStats { total: 3, pending: 1, preparing: 1, delivered: 1 });

        let latest: Vec<EntityId> = latest_orders(&orders, 2).iter().map(|o| o.id).collect();
        assert_eq!(latest, vec![3, 2]);
    }
}
