pub mod api;
pub mod mock;
pub mod ui;

use contracts::domain::a003_order::aggregate::{Order, OrderStatus};

use crate::shared::list_utils::{contains_ignore_case, ListToggle, Searchable};

impl Searchable for Order {
    /// Matches on the customer's name or email
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(&self.customer.name, term) || contains_ignore_case(&self.customer.email, term)
    }
}

/// Order status filter; `None` shows every order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFilter(pub Option<OrderStatus>);

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        self.0.map(|s| s.as_str()).unwrap_or("ALL")
    }

    pub fn parse(value: &str) -> Self {
        StatusFilter(OrderStatus::parse(value))
    }
}

impl ListToggle<Order> for StatusFilter {
    fn accepts(&self, item: &Order) -> bool {
        self.0.is_none_or(|status| item.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::mock::OrderMocks;
    use super::*;
    use crate::shared::api::FallbackProvider;
    use crate::shared::list_utils::ListController;

    #[test]
    fn test_search_by_name_or_email() {
        let orders = OrderMocks.items();
        let mut controller: ListController<StatusFilter> = ListController::new(6);

        controller.set_search("LUCAS");
        let found: Vec<_> = controller.derive(&orders).filtered.iter().map(|o| o.id).collect();
        assert_eq!(found, vec![2]);

        controller.set_search("juan@");
        let found: Vec<_> = controller.derive(&orders).filtered.iter().map(|o| o.id).collect();
        assert_eq!(found, vec![3]);
    }

    #[test]
    fn test_status_filter() {
        let orders = OrderMocks.items();
        let mut controller: ListController<StatusFilter> = ListController::new(6);
        assert_eq!(controller.derive(&orders).filtered.len(), 3);

        controller.set_toggle(StatusFilter::parse("pending"));
        let found: Vec<_> = controller.derive(&orders).filtered.iter().map(|o| o.id).collect();
        assert_eq!(found, vec![1]);

        assert_eq!(StatusFilter::parse("ALL"), StatusFilter(None));
        assert_eq!(StatusFilter(Some(OrderStatus::Ready)).as_str(), "READY");
    }
}
