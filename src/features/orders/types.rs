//! Order and checkout payloads for `/orders` and `/payments/checkout`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingPayment,
    Paid,
    InProgress,
    Submitted,
    RevisionRequested,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::PendingPayment => "Pending payment",
            Self::Paid => "Paid",
            Self::InProgress => "In progress",
            Self::Submitted => "Submitted",
            Self::RevisionRequested => "Revision requested",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub service_id: String,
    pub tier_name: String,
    pub price: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderList {
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderRequest {
    pub service_id: String,
    pub tier_name: String,
    pub requirements: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub order_id: String,
    /// Page origin; the backend builds the payment success and cancel URLs from it.
    pub origin: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSession {
    pub url: String,
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::{OrderList, OrderStatus};

    #[test]
    fn unknown_statuses_do_not_break_decoding() {
        let payload = r#"{"orders": [
            {"order_id": "ord_1", "service_id": "svc_1", "tier_name": "Starter", "price": 10.0, "status": "revision_requested"},
            {"order_id": "ord_2", "service_id": "svc_1", "tier_name": "Starter", "price": 10.0, "status": "disputed"}
        ]}"#;

        let list: OrderList = serde_json::from_str(payload).expect("orders");

        assert_eq!(list.orders[0].status, OrderStatus::RevisionRequested);
        assert_eq!(list.orders[1].status, OrderStatus::Unknown);
        assert_eq!(list.orders[0].status.label(), "Revision requested");
    }
}
