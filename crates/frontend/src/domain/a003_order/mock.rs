use chrono::{DateTime, TimeZone, Utc};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerType};
use contracts::domain::a002_dish::aggregate::{Dish, DishType};
use contracts::domain::a003_order::aggregate::{Order, OrderItem, OrderStatus};
use contracts::domain::common::EntityId;

use crate::shared::api::FallbackProvider;

/// Full sample orders with nested customer and dishes
pub struct OrderMocks;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn customer(id: EntityId, name: &str, email: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: email.to_string(),
        active: true,
        customer_type: CustomerType::Normal,
        orders: None,
    }
}

/// Menu categories of these dishes are not part of `DishType`
fn line(id: EntityId, dish_id: EntityId, dish_name: &str, price: i64, quantity: u32) -> OrderItem {
    OrderItem {
        id,
        dish: Dish {
            id: dish_id,
            name: dish_name.to_string(),
            price,
            dish_type: DishType::Other,
            active: true,
        },
        quantity,
        unit_price: price as f64,
        special_notes: None,
    }
}

impl FallbackProvider<Order> for OrderMocks {
    fn items(&self) -> Vec<Order> {
        vec![
            Order {
                id: 1,
                customer: customer(56, "Mati Alzu", "mati@example.com"),
                total: 3500.0,
                status: OrderStatus::Pending,
                order_date: at(2023, 10, 15, 14, 30),
                items: vec![
                    line(1, 1, "Tiramisú a la Criolla", 1500, 1),
                    line(2, 2, "Risotto Especial", 2000, 1),
                ],
            },
            Order {
                id: 2,
                customer: customer(57, "Lucas", "lucas@example.com"),
                total: 4000.0,
                status: OrderStatus::Delivered,
                order_date: at(2023, 10, 14, 18, 45),
                items: vec![
                    line(3, 4, "Ensalada Mediterránea", 1800, 2),
                    line(4, 1, "Tiramisú a la Criolla", 1500, 1),
                ],
            },
            Order {
                id: 3,
                customer: customer(60, "Juan Pérez", "juan@example.com"),
                total: 2400.0,
                status: OrderStatus::Preparing,
                order_date: at(2023, 10, 15, 19, 20),
                items: vec![line(5, 5, "Pasta al Pesto", 2400, 1)],
            },
        ]
    }

    fn accepts_offline_status(&self, id: EntityId) -> bool {
        self.find(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_orders() {
        let orders = OrderMocks.items();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[1].items_total(), 5100.0);
        assert_eq!(orders[0].order_date.to_rfc3339(), "2023-10-15T14:30:00+00:00");
        assert!(OrderMocks.accepts_offline_status(3));
    }
}
