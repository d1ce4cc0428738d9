//! # OrderApi Trait
//!
//! The seam between renderers and the order-management API. Renderers only
//! ever talk to an `Arc<dyn OrderApi>`, so production code plugs in
//! [`HttpOrderApi`](crate::clients::HttpOrderApi) and tests plug in
//! [`MockOrderApi`](crate::clients::MockOrderApi).

use crate::clients::error::ApiError;
use crate::model::{Order, OrderId, OrderListResponse};
use async_trait::async_trait;

#[async_trait]
pub trait OrderApi: Send + Sync {
    /// `GET /orders`
    async fn list_orders(&self) -> Result<OrderListResponse, ApiError>;

    /// `GET /orders/{order_id}`
    async fn get_order(&self, id: &OrderId) -> Result<Order, ApiError>;
}
