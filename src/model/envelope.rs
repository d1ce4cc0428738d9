//! Response shapes of `GET /orders`.

use crate::model::OrderSummary;
use serde::{Deserialize, Serialize};

/// The list endpoint answers either with a bare array (the canonical shape) or,
/// on older deployments, with the array wrapped under `body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderListResponse {
    Bare(Vec<OrderSummary>),
    Envelope {
        #[serde(default)]
        body: Option<Vec<OrderSummary>>,
    },
}

impl OrderListResponse {
    pub fn is_envelope(&self) -> bool {
        matches!(self, OrderListResponse::Envelope { .. })
    }

    /// Unwraps the orders. A missing or null `body` is an empty list.
    pub fn into_orders(self) -> Vec<OrderSummary> {
        match self {
            OrderListResponse::Bare(orders) => orders,
            OrderListResponse::Envelope { body } => body.unwrap_or_default(),
        }
    }
}

impl From<Vec<OrderSummary>> for OrderListResponse {
    fn from(orders: Vec<OrderSummary>) -> Self {
        OrderListResponse::Bare(orders)
    }
}
