//! Figures shown at the top of the dashboard.

use super::types::{Order, OrderStatus};

const RECENT_ORDERS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub order_count: usize,
    /// Sum of completed order prices.
    pub revenue: f64,
    /// Newest first, as returned by the API.
    pub recent: Vec<Order>,
}

impl DashboardSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        let revenue = orders
            .iter()
            .filter(|order| order.status == OrderStatus::Completed)
            .fold(0.0, |total, order| total + order.price);

        Self {
            order_count: orders.len(),
            revenue,
            recent: orders.iter().take(RECENT_ORDERS).cloned().collect(),
        }
    }

    pub fn revenue_display(&self) -> String {
        format!("${:.2}", self.revenue)
    }
}
