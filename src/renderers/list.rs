use crate::clients::{ApiError, OrderApi};
use crate::config::DEFAULT_DETAIL_PAGE;
use crate::format::date_pt_br;
use crate::model::{OrderId, OrderSummary};
use crate::renderers::{PageRenderer, RenderError, RenderOutcome, ORDER_ID_PARAM};
use crate::view::{escape, ids, list_page, Document, Markup, PageQuery, ViewError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use url::form_urlencoded;

/// Renders the order list: one table row per order, each linking to the
/// detail page.
#[derive(Clone)]
pub struct ListRenderer {
    api: Arc<dyn OrderApi>,
    detail_page: String,
    accept_envelope: bool,
}

impl ListRenderer {
    pub fn new(api: Arc<dyn OrderApi>) -> Self {
        Self {
            api,
            detail_page: DEFAULT_DETAIL_PAGE.to_string(),
            accept_envelope: true,
        }
    }

    /// Page the "Ver Detalhes" links point at.
    pub fn with_detail_page(mut self, detail_page: impl Into<String>) -> Self {
        self.detail_page = detail_page.into();
        self
    }

    /// Whether the legacy `{ "body": [...] }` response shape is still accepted.
    pub fn accept_envelope(mut self, accept: bool) -> Self {
        self.accept_envelope = accept;
        self
    }

    pub fn detail_link(&self, id: &OrderId) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(ORDER_ID_PARAM, id.as_str())
            .finish();
        format!("{}?{}", self.detail_page, query)
    }

    async fn fetch(&self) -> Result<Vec<OrderSummary>, RenderError> {
        let response = self.api.list_orders().await?;
        if response.is_envelope() {
            if !self.accept_envelope {
                return Err(ApiError::Decode("legacy body envelope is disabled".into()).into());
            }
            debug!("Unwrapping legacy body envelope");
        }
        Ok(response.into_orders())
    }

    fn row(&self, order: &OrderSummary) -> Markup {
        Markup::trusted(format!(
            "<tr><td>{id}</td><td>{date}</td><td>{status}</td><td>{customer}</td><td><a href=\"{href}\">Ver Detalhes</a></td></tr>",
            id = escape(order.order_id.as_str()),
            date = escape(&date_pt_br(&order.order_date)),
            status = escape(&order.order_status),
            customer = escape(&order.customer.full_name()),
            href = escape(&self.detail_link(&order.order_id)),
        ))
    }

    fn fill(&self, doc: &mut Document, orders: &[OrderSummary]) -> Result<(), ViewError> {
        let body = doc.element_mut(ids::ORDERS_BODY)?;
        body.clear_children();
        for order in orders {
            body.append_child(self.row(order));
        }
        Ok(())
    }
}

#[async_trait]
impl PageRenderer for ListRenderer {
    fn template(&self) -> Document {
        list_page()
    }

    #[instrument(name = "list_page", skip_all)]
    async fn render(&self, doc: &mut Document, _query: &PageQuery) -> RenderOutcome {
        info!("Fetching orders");
        let orders = match self.fetch().await {
            Ok(orders) => orders,
            Err(e) => {
                error!(error = %e, "Failed to fetch orders");
                return RenderOutcome::Failed(e);
            }
        };

        if orders.is_empty() {
            warn!("No orders found");
            return RenderOutcome::Empty;
        }

        if let Err(e) = self.fill(doc, &orders) {
            error!(error = %e, "Failed to render orders");
            return RenderOutcome::Failed(e.into());
        }

        info!(count = orders.len(), "Orders loaded");
        RenderOutcome::Rendered {
            entries: orders.len(),
        }
    }
}
