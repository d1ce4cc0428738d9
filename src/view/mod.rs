//! Page view model: documents, markup, templates and the page query string.

pub mod document;
pub mod error;
pub mod markup;
pub mod query;
pub mod templates;

pub use document::*;
pub use error::*;
pub use markup::*;
pub use query::*;
pub use templates::{detail_page, ids, list_page};
