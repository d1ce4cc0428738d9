//! Clients for the order-management API.

pub mod api;
pub mod error;
pub mod http_client;
pub mod mock;

pub use api::*;
pub use error::*;
pub use http_client::*;
pub use mock::*;
