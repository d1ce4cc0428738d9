//! # Mock Order API
//!
//! `MockOrderApi` implements [`OrderApi`] entirely in memory. Expectations are
//! queued up front and consumed in order, one per call, which keeps renderer
//! tests fast and deterministic and makes failure injection trivial.
//!
//! ```rust
//! use order_views::clients::{ApiError, MockOrderApi, OrderApi};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockOrderApi::new();
//!     mock.expect_list_orders().return_err(ApiError::Status {
//!         status: 503,
//!         reason: "Service Unavailable".into(),
//!     });
//!
//!     assert!(mock.list_orders().await.is_err());
//!     assert_eq!(mock.call_count(), 1);
//!     mock.verify();
//! }
//! ```
//!
//! A call with no matching expectation panics, so a test that expects *no*
//! request can simply queue nothing and check [`MockOrderApi::call_count`].

use crate::clients::api::OrderApi;
use crate::clients::error::ApiError;
use crate::model::{Order, OrderId, OrderListResponse};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

enum Expectation {
    ListOrders {
        response: Result<OrderListResponse, ApiError>,
    },
    GetOrder {
        id: OrderId,
        response: Result<Order, ApiError>,
    },
}

/// A request the mock has received.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    ListOrders,
    GetOrder(OrderId),
}

/// In-memory [`OrderApi`] with expectation tracking.
///
/// Clones share the same expectation queue and call log, so a test can keep
/// one handle while the renderer owns another.
#[derive(Clone, Default)]
pub struct MockOrderApi {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockOrderApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list_orders` call.
    pub fn expect_list_orders(&self) -> ListOrdersExpectationBuilder {
        ListOrdersExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get_order` call for `id`.
    pub fn expect_get_order(&self, id: impl Into<OrderId>) -> GetOrderExpectationBuilder {
        GetOrderExpectationBuilder {
            id: id.into(),
            expectations: self.expectations.clone(),
        }
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self, call: MockCall) -> Expectation {
        self.calls.lock().unwrap().push(call.clone());
        let next = self.expectations.lock().unwrap().pop_front();
        match next {
            Some(expectation) => expectation,
            None => panic!("Unexpected request: {call:?}"),
        }
    }
}

#[async_trait]
impl OrderApi for MockOrderApi {
    async fn list_orders(&self) -> Result<OrderListResponse, ApiError> {
        match self.next(MockCall::ListOrders) {
            Expectation::ListOrders { response } => response,
            Expectation::GetOrder { id, .. } => {
                panic!("Expectation mismatch: got list_orders, expected get_order({id})")
            }
        }
    }

    async fn get_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        match self.next(MockCall::GetOrder(id.clone())) {
            Expectation::GetOrder {
                id: expected,
                response,
            } => {
                assert_eq!(&expected, id, "get_order called with an unexpected id");
                response
            }
            Expectation::ListOrders { .. } => {
                panic!("Expectation mismatch: got get_order({id}), expected list_orders")
            }
        }
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Builder for `list_orders` expectations.
pub struct ListOrdersExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ListOrdersExpectationBuilder {
    pub fn return_ok(self, response: impl Into<OrderListResponse>) {
        self.push(Ok(response.into()));
    }

    /// Answers with a raw JSON payload, decoded the same way the HTTP client
    /// decodes a response body.
    pub fn return_json(self, body: serde_json::Value) {
        self.push(decode(body));
    }

    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<OrderListResponse, ApiError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::ListOrders { response });
    }
}

/// Builder for `get_order` expectations.
pub struct GetOrderExpectationBuilder {
    id: OrderId,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl GetOrderExpectationBuilder {
    pub fn return_ok(self, order: Order) {
        self.push(Ok(order));
    }

    /// Answers with a raw JSON payload, decoded the same way the HTTP client
    /// decodes a response body.
    pub fn return_json(self, body: serde_json::Value) {
        self.push(decode(body));
    }

    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Order, ApiError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::GetOrder {
            id: self.id,
            response,
        });
    }
}
