pub mod ui;

use contracts::domain::a001_customer::aggregate::{Customer, CustomerStats};
use contracts::domain::a002_dish::aggregate::Dish;
use contracts::domain::a003_order::aggregate::{Order, OrderStats, OrderStatus};

/// Orders listed on the dashboard
pub const LATEST_ORDERS: usize = 5;

/// Headline numbers across all resources
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overview {
    pub customers: usize,
    pub active_customers: usize,
    pub dishes: usize,
    pub active_dishes: usize,
    pub orders: usize,
    /// Orders neither delivered nor cancelled
    pub open_orders: usize,
    pub revenue: f64,
}

impl Overview {
    pub fn collect(customers: &[Customer], dishes: &[Dish], orders: &[Order]) -> Self {
        let customer_stats = CustomerStats::from_customers(customers);
        let order_stats = OrderStats::from_orders(orders);
        Self {
            customers: customer_stats.total,
            active_customers: customer_stats.active,
            dishes: dishes.len(),
            active_dishes: dishes.iter().filter(|d| d.active).count(),
            orders: order_stats.total,
            open_orders: orders
                .iter()
                .filter(|o| !matches!(o.status, OrderStatus::Delivered | OrderStatus::Cancelled))
                .count(),
            revenue: orders
                .iter()
                .filter(|o| o.status != OrderStatus::Cancelled)
                .map(|o| o.total)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::mock::CustomerMocks;
    use crate::domain::a002_dish::mock::DishMocks;
    use crate::domain::a003_order::mock::OrderMocks;
    use crate::shared::api::FallbackProvider;

    #[test]
    fn test_overview_from_sample_data() {
        let overview = Overview::collect(&CustomerMocks.items(), &DishMocks.items(), &OrderMocks.items());
        assert_eq!(overview.customers, 5);
        assert_eq!(overview.active_customers, 4);
        assert_eq!(overview.dishes, 5);
        assert_eq!(overview.active_dishes, 3);
        assert_eq!(overview.orders, 3);
        assert_eq!(overview.open_orders, 2);
        assert_eq!(overview.revenue, 9900.0);
    }

    #[test]
    fn test_overview_empty() {
        assert_eq!(Overview::collect(&[], &[], &[]), Overview::default());
    }
}
