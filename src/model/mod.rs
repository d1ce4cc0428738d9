//! Wire data structures (DTOs) of the order-management API.

pub mod envelope;
pub mod order;

pub use envelope::*;
pub use order::*;
