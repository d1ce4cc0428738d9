//! Error types for page rendering.

use crate::clients::ApiError;
use crate::view::ViewError;
use thiserror::Error;

/// Why a render cycle ended without populating its page.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RenderError {
    /// The API call failed: non-success status, transport error or bad body.
    #[error("Fetch failed: {0}")]
    FetchFailure(#[from] ApiError),

    /// A required page input (query parameter) is absent.
    #[error("Missing page input: {0}")]
    MissingInput(&'static str),

    /// The page template does not define an element the renderer writes to.
    #[error("Page template mismatch: {0}")]
    View(#[from] ViewError),
}
