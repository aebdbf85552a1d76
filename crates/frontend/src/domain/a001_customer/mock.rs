use contracts::domain::a001_customer::aggregate::{Customer, CustomerType};
use contracts::domain::common::EntityId;

use crate::shared::api::FallbackProvider;

/// Sample customers shown when the API is down.
///
/// Records carry no order history, and status changes are never applied
/// offline.
pub struct CustomerMocks;

fn customer(id: EntityId, name: &str, email: &str, active: bool, customer_type: CustomerType) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: email.to_string(),
        active,
        customer_type,
        orders: None,
    }
}

impl FallbackProvider<Customer> for CustomerMocks {
    fn items(&self) -> Vec<Customer> {
        vec![
            customer(56, "Mati Alzu", "mati@example.com", true, CustomerType::Normal),
            customer(57, "Lucas", "lucas@example.com", true, CustomerType::Normal),
            customer(59, "María Rodríguez", "maria@example.com", false, CustomerType::Normal),
            customer(60, "Juan Pérez", "juan@example.com", true, CustomerType::Frequent),
            customer(61, "Ana García", "ana@example.com", true, CustomerType::Normal),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_customers() {
        let items = CustomerMocks.items();
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|c| c.orders.is_none()));
        assert_eq!(items.iter().filter(|c| !c.active).count(), 1);
        assert_eq!(CustomerMocks.find(60).map(|c| c.customer_type), Some(CustomerType::Frequent));
        assert!(!CustomerMocks.accepts_offline_status(56));
    }
}
