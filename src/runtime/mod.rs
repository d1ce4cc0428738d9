//! Runtime orchestration.
//!
//! - [`OrderSite`] - wires the order API into both renderers and hosts them
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod site;
pub mod tracing;

pub use site::*;
pub use self::tracing::*;
