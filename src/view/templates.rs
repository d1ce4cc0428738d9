//! Page templates.
//!
//! The element ids in [`ids`] are the contract between renderers and the
//! HTML they produce; both pages are built from them and serialized back with
//! [`Document::to_html`].

use crate::view::document::{Document, Element, PageKind};
use crate::view::markup::{escape, Markup};

pub mod ids {
    pub const ORDERS_BODY: &str = "orders-body";

    pub const LOADER: &str = "loader";
    pub const ORDER_FORM: &str = "order-form";

    pub const ORDER_ID: &str = "order_id";
    pub const ORDER_DATE: &str = "order_date";
    pub const ORDER_STATUS: &str = "order_status";
    pub const CUSTOMER_NAME: &str = "customer_name";
    pub const CUSTOMER_EMAIL: &str = "customer_email";
    pub const CUSTOMER_PHONE: &str = "customer_phone";
    pub const ITEMS_LIST: &str = "items-list";
    pub const PAYMENT_METHOD: &str = "payment_method";
    pub const PAYMENT_AMOUNT: &str = "payment_amount";
    pub const SHIPPING_METHOD: &str = "shipping_method";
    pub const SHIPPING_ADDRESS: &str = "shipping_address";
    pub const SHIPPING_COST: &str = "shipping_cost";
    pub const SHIPPING_DATE: &str = "shipping_date";
}

/// Detail form layout: section title, then `(element id, label)` per input.
const DETAIL_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Pedido",
        &[
            (ids::ORDER_ID, "ID do Pedido"),
            (ids::ORDER_DATE, "Data do Pedido"),
            (ids::ORDER_STATUS, "Status"),
        ],
    ),
    (
        "Cliente",
        &[
            (ids::CUSTOMER_NAME, "Nome"),
            (ids::CUSTOMER_EMAIL, "E-mail"),
            (ids::CUSTOMER_PHONE, "Telefone"),
        ],
    ),
    (
        "Pagamento",
        &[
            (ids::PAYMENT_METHOD, "Método de Pagamento"),
            (ids::PAYMENT_AMOUNT, "Valor"),
        ],
    ),
    (
        "Envio",
        &[
            (ids::SHIPPING_METHOD, "Método de Envio"),
            (ids::SHIPPING_COST, "Custo do Frete"),
            (ids::SHIPPING_DATE, "Previsão de Entrega"),
        ],
    ),
];

pub fn list_page() -> Document {
    Document::new(PageKind::List, "Pedidos").with_element(ids::ORDERS_BODY, Element::new(true))
}

/// Detail page as served before any data arrives: loader shown, form hidden.
pub fn detail_page() -> Document {
    let mut doc = Document::new(PageKind::Detail, "Detalhes do Pedido")
        .with_element(ids::LOADER, Element::new(true))
        .with_element(ids::ORDER_FORM, Element::new(false))
        .with_element(ids::ITEMS_LIST, Element::new(true))
        .with_element(ids::SHIPPING_ADDRESS, Element::new(true));
    for (_, fields) in DETAIL_SECTIONS {
        for (id, _) in *fields {
            doc = doc.with_element(*id, Element::new(true));
        }
    }
    doc
}

impl Document {
    /// Serializes the whole page.
    pub fn to_html(&self) -> String {
        let body = match self.kind() {
            PageKind::List => self.list_body(),
            PageKind::Detail => self.detail_body(),
        };
        format!(
            "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<div class=\"container\">\n<h1>{title}</h1>\n{body}</div>\n</body>\n</html>\n",
            title = escape(self.title()),
        )
    }

    fn list_body(&self) -> String {
        let mut html = String::from(
            "<table class=\"table\">\n<thead><tr><th>ID</th><th>Data</th><th>Status</th><th>Cliente</th><th></th></tr></thead>\n",
        );
        html.push_str(&open_tag("tbody", ids::ORDERS_BODY, self.element(ids::ORDERS_BODY)));
        html.push('\n');
        html.push_str(&children_html(self.element(ids::ORDERS_BODY)));
        html.push_str("</tbody>\n</table>\n");
        html
    }

    fn detail_body(&self) -> String {
        let mut html = open_tag("div", ids::LOADER, self.element(ids::LOADER));
        html.push_str("<span>Carregando...</span></div>\n");

        let form = self.element(ids::ORDER_FORM);
        html.push_str(&open_tag("div", ids::ORDER_FORM, form));
        html.push('\n');
        match form.and_then(Element::inner) {
            Some(replacement) => {
                html.push_str(replacement.as_str());
                html.push('\n');
            }
            None => html.push_str(&self.detail_form()),
        }
        html.push_str("</div>\n");
        html
    }

    fn detail_form(&self) -> String {
        let mut html = String::from("<form>\n");
        for (section, fields) in DETAIL_SECTIONS {
            html.push_str(&format!("<h2>{}</h2>\n", escape(section)));
            for (id, label) in *fields {
                html.push_str(&format!(
                    "<div class=\"mb-3\"><label for=\"{id}\" class=\"form-label\">{label}</label><input type=\"text\" class=\"form-control\" id=\"{id}\" value=\"{value}\" readonly></div>\n",
                    label = escape(label),
                    value = escape(self.value(id).unwrap_or_default()),
                ));
            }
            if *section == "Pedido" {
                html.push_str("<h2>Itens</h2>\n");
                html.push_str(&open_tag("ul", ids::ITEMS_LIST, self.element(ids::ITEMS_LIST)));
                html.push('\n');
                html.push_str(&children_html(self.element(ids::ITEMS_LIST)));
                html.push_str("</ul>\n");
            }
        }
        html.push_str(&format!(
            "<div class=\"mb-3\"><label for=\"{id}\" class=\"form-label\">Endereço de Entrega</label><textarea class=\"form-control\" id=\"{id}\" rows=\"3\" readonly>{value}</textarea></div>\n",
            id = ids::SHIPPING_ADDRESS,
            value = escape(self.value(ids::SHIPPING_ADDRESS).unwrap_or_default()),
        ));
        html.push_str("</form>\n");
        html
    }
}

fn open_tag(tag: &str, id: &str, element: Option<&Element>) -> String {
    let hidden = element.is_some_and(|e| !e.is_visible());
    let class = match tag {
        "ul" => " class=\"list-group\"",
        _ => "",
    };
    if hidden {
        format!("<{tag} id=\"{id}\"{class} style=\"display: none\">")
    } else {
        format!("<{tag} id=\"{id}\"{class}>")
    }
}

fn children_html(element: Option<&Element>) -> String {
    element
        .map(|e| e.children())
        .unwrap_or_default()
        .iter()
        .map(|child: &Markup| format!("{child}\n"))
        .collect()
}
