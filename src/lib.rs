//! # Order Views
//!
//! > **Order list and order detail pages, rendered from the order-management API.**
//!
//! This crate fetches orders from a remote API and renders them into two HTML
//! pages: a table of all orders and a read-only detail form for one order.
//! There is no business logic here. A page load is one request, one render,
//! one terminal outcome.
//!
//! ## 🏗️ Design
//!
//! ### One cycle per page
//!
//! Each renderer is invoked once per page load, suspends once for the network
//! response, then mutates its own [`Document`](view::Document). It ends in
//! exactly one [`RenderOutcome`](renderers::RenderOutcome): rendered, empty,
//! or failed. No retry, no polling, no shared state between pages.
//!
//! ### Failures stay inside the render call
//!
//! A failed fetch is logged. The list page is left as served; the detail page
//! hides its loader and shows a generic error block in place of the form.
//! Hosts get the outcome back for inspection but never an `Err`.
//!
//! ### The element ids are the contract
//!
//! Renderers only address elements by the fixed ids in
//! [`view::ids`] (`orders-body`, `order_id`, `items-list`, `loader`,
//! `order-form`, ...). The templates in [`view::templates`] define those ids
//! and serialize the page.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Wire types of the API: [`Order`](model::Order), the narrower
//! [`OrderSummary`](model::OrderSummary) used by the list, and
//! [`OrderListResponse`](model::OrderListResponse), which accepts both the bare
//! array and the legacy `{ "body": [...] }` envelope.
//!
//! ### 2. The Interface ([`clients`])
//! [`OrderApi`](clients::OrderApi) is the seam. [`HttpOrderApi`](clients::HttpOrderApi)
//! talks to the real API with `reqwest`; [`MockOrderApi`](clients::MockOrderApi)
//! answers from an in-memory expectation queue for tests.
//!
//! ### 3. The Pages ([`renderers`], [`view`], [`format`])
//! [`ListRenderer`](renderers::ListRenderer) and
//! [`DetailRenderer`](renderers::DetailRenderer) implement
//! [`PageRenderer`](renderers::PageRenderer). Dates are shown as `DD/MM/YYYY`
//! and money as `R$ 0.00`.
//!
//! ### 4. The Host ([`runtime`], [`config`])
//! [`OrderSite`](runtime::OrderSite) wires one API client into both renderers
//! and exposes them to the CLI and to a small `axum` front.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Render the list page to stdout
//! RUST_LOG=info cargo run -- list
//!
//! # Render one order
//! cargo run -- detail --url 'details.html?order_id=1' --out details.html
//!
//! # Serve both pages on 127.0.0.1:8080
//! ORDER_VIEWS_API_BASE_URL=http://localhost:9000 cargo run -- serve
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod format;
pub mod model;
pub mod renderers;
pub mod runtime;
pub mod view;
