use crate::clients::OrderApi;
use crate::format::{currency_brl, date_pt_br, quantity, shipping_address};
use crate::model::{Order, OrderId, OrderItem};
use crate::renderers::{PageRenderer, RenderError, RenderOutcome, ORDER_ID_PARAM};
use crate::view::{detail_page, escape, ids, Document, Markup, PageQuery, ViewError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Message shown in place of the form when the order cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str =
    "Ocorreu um erro ao carregar os detalhes do pedido. Por favor, tente novamente mais tarde.";

/// Renders one order into the detail form.
#[derive(Clone)]
pub struct DetailRenderer {
    api: Arc<dyn OrderApi>,
}

impl DetailRenderer {
    pub fn new(api: Arc<dyn OrderApi>) -> Self {
        Self { api }
    }

    fn item(item: &OrderItem) -> Markup {
        Markup::trusted(format!(
            "<li class=\"list-group-item\"><div class=\"d-flex w-100 justify-content-between\"><h5 class=\"mb-1\">{description}</h5><small>Quantidade: {quantity}</small></div><p class=\"mb-1\">Preço Unitário: {price}</p></li>",
            description = escape(&item.description),
            quantity = escape(&quantity(item.quantity)),
            price = escape(&currency_brl(item.unit_price)),
        ))
    }

    fn error_block() -> Markup {
        Markup::trusted(format!(
            "<div class=\"alert alert-danger\" role=\"alert\">{}</div>",
            escape(LOAD_ERROR_MESSAGE)
        ))
    }

    fn fill(doc: &mut Document, order: &Order) -> Result<(), ViewError> {
        doc.set_value(ids::ORDER_ID, order.order_id.as_str())?;
        doc.set_value(ids::ORDER_DATE, date_pt_br(&order.order_date))?;
        doc.set_value(ids::ORDER_STATUS, order.order_status.as_str())?;

        let customer = &order.customer;
        doc.set_value(ids::CUSTOMER_NAME, customer.full_name())?;
        doc.set_value(ids::CUSTOMER_EMAIL, customer.email.clone().unwrap_or_default())?;
        doc.set_value(ids::CUSTOMER_PHONE, customer.phone.clone().unwrap_or_default())?;

        let items = doc.element_mut(ids::ITEMS_LIST)?;
        items.clear_children();
        for item in &order.items {
            items.append_child(Self::item(item));
        }

        doc.set_value(ids::PAYMENT_METHOD, order.payment.method.as_str())?;
        doc.set_value(ids::PAYMENT_AMOUNT, currency_brl(order.payment.amount))?;

        let shipping = &order.shipping;
        doc.set_value(ids::SHIPPING_METHOD, shipping.method.as_str())?;
        doc.set_value(ids::SHIPPING_ADDRESS, shipping_address(&shipping.address))?;
        doc.set_value(ids::SHIPPING_COST, currency_brl(shipping.cost))?;
        doc.set_value(ids::SHIPPING_DATE, date_pt_br(&shipping.expected_delivery_date))?;

        doc.element_mut(ids::LOADER)?.hide();
        doc.element_mut(ids::ORDER_FORM)?.show();
        Ok(())
    }

    /// Swaps the form for the error block. The loader is hidden either way.
    fn show_error(doc: &mut Document) {
        if let Ok(form) = doc.element_mut(ids::ORDER_FORM) {
            form.replace_inner(Self::error_block());
            form.show();
        }
        if let Ok(loader) = doc.element_mut(ids::LOADER) {
            loader.hide();
        }
    }

    async fn load(&self, doc: &mut Document, id: &OrderId) -> Result<usize, RenderError> {
        let order = self.api.get_order(id).await?;
        debug!(?order, "Order received");
        Self::fill(doc, &order)?;
        Ok(order.items.len())
    }
}

#[async_trait]
impl PageRenderer for DetailRenderer {
    fn template(&self) -> Document {
        detail_page()
    }

    #[instrument(name = "detail_page", skip_all)]
    async fn render(&self, doc: &mut Document, query: &PageQuery) -> RenderOutcome {
        let Some(raw_id) = query.get(ORDER_ID_PARAM) else {
            error!("Order id not found in page query");
            return RenderOutcome::Failed(RenderError::MissingInput(ORDER_ID_PARAM));
        };
        let id = OrderId::from(raw_id);

        info!(order_id = %id, "Fetching order details");
        match self.load(doc, &id).await {
            Ok(entries) => {
                info!(order_id = %id, items = entries, "Order details loaded");
                RenderOutcome::Rendered { entries }
            }
            Err(e) => {
                error!(order_id = %id, error = %e, "Failed to load order details");
                Self::show_error(doc);
                RenderOutcome::Failed(e)
            }
        }
    }
}
