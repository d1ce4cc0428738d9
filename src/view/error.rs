//! Error types for the page view model.

use thiserror::Error;

/// Errors raised while mutating a page document.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ViewError {
    /// A renderer addressed an element id the page template does not define.
    #[error("Element not found in page: {0}")]
    MissingElement(String),
}
