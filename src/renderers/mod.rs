//! # Page Renderers
//!
//! Each renderer runs one fetch-and-render cycle per page load and ends in
//! exactly one [`RenderOutcome`]. Failures are logged and handled inside the
//! render call; nothing is propagated to the host as an `Err`.
//!
//! - [`ListRenderer`]: `GET /orders` into the `orders-body` table.
//! - [`DetailRenderer`]: `GET /orders/{order_id}` into the detail form.

pub mod detail;
pub mod error;
pub mod list;

pub use detail::*;
pub use error::*;
pub use list::*;

use crate::view::{Document, PageQuery};
use async_trait::async_trait;

/// Query-string key carrying the order id on the detail page.
pub const ORDER_ID_PARAM: &str = "order_id";

/// Terminal state of one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The page was populated; `entries` is the number of rows or items.
    Rendered { entries: usize },
    /// The API returned no orders; the page was left as served.
    Empty,
    Failed(RenderError),
}

impl RenderOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RenderOutcome::Failed(_))
    }
}

/// A renderer bound to one page template.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// The page as served before any data arrives.
    fn template(&self) -> Document;

    /// Runs one fetch-and-render cycle against `doc`.
    async fn render(&self, doc: &mut Document, query: &PageQuery) -> RenderOutcome;

    /// Renders a fresh copy of the template.
    async fn render_page(&self, query: &PageQuery) -> (Document, RenderOutcome) {
        let mut doc = self.template();
        let outcome = self.render(&mut doc, query).await;
        (doc, outcome)
    }
}
