//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Each render cycle runs inside a `list_page` or `detail_page` span, and the
//! HTTP client adds a `get_json` span carrying the request URL, so one page
//! load reads as a single indented story.
//!
//! ## Configuration
//!
//! Verbosity comes from `RUST_LOG`; the format is compact with targets hidden.
//! Logs go to stderr: `list` and `detail` print the page itself on stdout.
//!
//! ```bash
//! # Page outcomes only
//! RUST_LOG=info order-views list
//!
//! # Full order payloads and response sizes
//! RUST_LOG=debug order-views detail --url 'details.html?order_id=1'
//!
//! # Only this crate
//! RUST_LOG=order_views=debug order-views serve
//! ```
//!
//! ## What a page load looks like
//!
//! **`RUST_LOG=info`**:
//!
//! ```text
//! INFO detail_page: Fetching order details order_id=1
//! INFO detail_page: Order details loaded order_id=1 items=2
//! ```
//!
//! **`RUST_LOG=debug`**:
//!
//! ```text
//! INFO detail_page: Fetching order details order_id=1
//! DEBUG detail_page:get_json: Sending request url=https://.../prod/orders/1
//! DEBUG detail_page:get_json: Response received url=https://.../prod/orders/1 bytes=812
//! DEBUG detail_page: Order received order=Order { order_id: OrderId("1"), .. }
//! INFO detail_page: Order details loaded order_id=1 items=2
//! ```
//!
//! Failures are logged at `error` with the cause as a structured `error` field;
//! an empty order list is a `warn`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
