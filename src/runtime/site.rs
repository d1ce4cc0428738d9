use crate::clients::{ApiError, HttpOrderApi, OrderApi};
use crate::config::{
    detail_page_path, is_routable, ConfigError, SiteConfig, DEFAULT_DETAIL_PAGE,
};
use crate::renderers::{DetailRenderer, ListRenderer, PageRenderer, RenderOutcome};
use crate::view::{Document, PageQuery};
use axum::extract::{RawQuery, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// The runtime orchestrator for the two order pages.
///
/// `OrderSite` wires one [`OrderApi`] into both renderers and is the single
/// place hosts (the CLI, the HTTP front) go through to produce a page. Every
/// call runs exactly one fetch-and-render cycle on a fresh document.
///
/// # Example
///
/// ```ignore
/// let site = OrderSite::from_config(&SiteConfig::from_env())?;
/// let (doc, outcome) = site.list_page().await;
/// println!("{}", doc.to_html());
/// ```
pub struct OrderSite {
    list: ListRenderer,
    detail: DetailRenderer,
    detail_route: String,
}

impl OrderSite {
    pub fn new(api: Arc<dyn OrderApi>, config: &SiteConfig) -> Self {
        Self {
            list: ListRenderer::new(api.clone())
                .with_detail_page(config.detail_page.clone())
                .accept_envelope(config.accept_envelope),
            detail: DetailRenderer::new(api),
            detail_route: detail_route(&config.detail_page),
        }
    }

    /// Builds the site against the HTTP API named in `config`.
    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        let api = HttpOrderApi::new(&config.api_base_url).map_err(|e| match e {
            ApiError::InvalidUrl(url) => ConfigError::InvalidApiBaseUrl(url),
            other => ConfigError::HttpClient(other.to_string()),
        })?;
        info!(api_base_url = %api.base_url(), "Order API client ready");
        Ok(Self::new(Arc::new(api), config))
    }

    pub async fn list_page(&self) -> (Document, RenderOutcome) {
        self.list.render_page(&PageQuery::default()).await
    }

    pub async fn detail_page(&self, query: &PageQuery) -> (Document, RenderOutcome) {
        self.detail.render_page(query).await
    }

    /// Path the HTTP front serves the detail page on.
    pub fn detail_route(&self) -> &str {
        &self.detail_route
    }

    /// `GET /` and `GET /index.html` serve the list, the detail route serves
    /// the detail page.
    pub fn router(self: Arc<Self>) -> Router {
        let detail_route = self.detail_route.clone();
        Router::new()
            .route("/", get(list_handler))
            .route("/index.html", get(list_handler))
            .route(&detail_route, get(detail_handler))
            .with_state(self)
    }

    /// Serves both pages until Ctrl-C.
    pub async fn serve(self: Arc<Self>, bind_addr: &str) -> Result<(), String> {
        let listener = TcpListener::bind(bind_addr)
            .await
            .map_err(|e| format!("bind failed: {e}"))?;
        info!("order-views listening on {bind_addr}");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| format!("server failed: {e}"))
    }
}

/// Route for the configured detail page. Absolute link targets point at some
/// other host, the list routes are taken, and reserved characters would turn
/// the path into a pattern, so those keep the default path.
fn detail_route(detail_page: &str) -> String {
    let fallback = format!("/{DEFAULT_DETAIL_PAGE}");
    let Some(path) = detail_page_path(detail_page).filter(|p| is_routable(p)) else {
        return fallback;
    };
    let route = format!("/{}", path.trim_start_matches('/'));
    if matches!(route.as_str(), "/" | "/index.html") {
        return fallback;
    }
    route
}

#[instrument(skip_all)]
async fn list_handler(State(site): State<Arc<OrderSite>>) -> Html<String> {
    let (doc, outcome) = site.list_page().await;
    if outcome.is_failure() {
        warn!(?outcome, "List page served without orders");
    }
    Html(doc.to_html())
}

#[instrument(skip_all)]
async fn detail_handler(
    State(site): State<Arc<OrderSite>>,
    RawQuery(query): RawQuery,
) -> Html<String> {
    let query = PageQuery::parse(query.as_deref().unwrap_or_default());
    let (doc, outcome) = site.detail_page(&query).await;
    if outcome.is_failure() {
        warn!(?outcome, "Detail page served without order data");
    }
    Html(doc.to_html())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
