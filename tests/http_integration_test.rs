use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use order_views::clients::{ApiError, HttpOrderApi, OrderApi};
use order_views::config::SiteConfig;
use order_views::model::OrderId;
use order_views::renderers::RenderOutcome;
use order_views::runtime::OrderSite;
use order_views::view::{ids, PageQuery};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;

async fn list_orders() -> impl IntoResponse {
    Json(json!([
        {
            "order_id": 1,
            "order_date": "2024-01-01T10:00:00Z",
            "order_status": "shipped",
            "customer": {"first_name": "A", "last_name": "B"}
        }
    ]))
}

async fn get_order(Path(id): Path<String>) -> axum::response::Response {
    if id != "1" {
        return (StatusCode::NOT_FOUND, "no such order").into_response();
    }
    Json(json!({
        "order_id": 1,
        "order_date": "2024-01-01T10:00:00Z",
        "order_status": "shipped",
        "customer": {"first_name": "A", "last_name": "B", "email": "a@b.com"},
        "items": [{"description": "Widget", "quantity": 2, "unit_price": 9.5}],
        "payment": {"method": "pix", "amount": "19.00"},
        "shipping": {
            "method": "standard",
            "cost": 10,
            "expected_delivery_date": "2024-01-05",
            "address": {
                "street": "Rua B",
                "number": "7",
                "neighborhood": "Vila",
                "city": "Recife",
                "state": "PE",
                "zip_code": 50000000
            }
        }
    }))
    .into_response()
}

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    format!("http://{addr}")
}

/// Stub of the order-management API mounted under `/prod`.
async fn spawn_api() -> String {
    let app = Router::new()
        .route("/prod/orders", get(list_orders))
        .route("/prod/orders/:id", get(get_order));
    format!("{}/prod", spawn(app).await)
}

#[tokio::test]
async fn test_http_client_lists_and_gets_orders() {
    let api = HttpOrderApi::new(&spawn_api().await).expect("Failed to build client");

    let orders = api
        .list_orders()
        .await
        .expect("Failed to list orders")
        .into_orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_id, OrderId::from("1"));
    assert_eq!(orders[0].customer.full_name(), "A B");

    let order = api
        .get_order(&OrderId::from("1"))
        .await
        .expect("Failed to get order");
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.shipping.address.zip_code, "50000000");
}

#[tokio::test]
async fn test_http_client_reports_non_success_status() {
    let api = HttpOrderApi::new(&spawn_api().await).expect("Failed to build client");

    let result = api.get_order(&OrderId::from("404")).await;

    assert_eq!(
        result,
        Err(ApiError::Status {
            status: 404,
            reason: "Not Found".into(),
        })
    );
}

#[tokio::test]
async fn test_http_client_reports_unreachable_api() {
    // Bind and drop to get a port nobody is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpOrderApi::new(&format!("http://{addr}")).unwrap();

    assert!(matches!(
        api.list_orders().await,
        Err(ApiError::Transport(_))
    ));
}

/// Full stack: site built from config against the stub API.
#[tokio::test]
async fn test_site_renders_both_pages() {
    let config = SiteConfig {
        api_base_url: spawn_api().await,
        ..SiteConfig::default()
    };
    let site = OrderSite::from_config(&config).expect("Failed to build site");

    let (list, outcome) = site.list_page().await;
    assert_eq!(outcome, RenderOutcome::Rendered { entries: 1 });
    assert!(list.to_html().contains("href=\"details.html?order_id=1\""));

    let (detail, outcome) = site
        .detail_page(&PageQuery::parse("details.html?order_id=1"))
        .await;
    assert_eq!(outcome, RenderOutcome::Rendered { entries: 1 });
    assert_eq!(detail.value(ids::PAYMENT_AMOUNT), Some("R$ 19.00"));
    assert_eq!(detail.value(ids::SHIPPING_COST), Some("R$ 10.00"));

    let (missing, outcome) = site
        .detail_page(&PageQuery::parse("details.html?order_id=2"))
        .await;
    assert!(outcome.is_failure());
    assert!(!missing.is_visible(ids::LOADER));
}

/// The HTTP front serves the list on `/` and the detail page on its route.
#[tokio::test]
async fn test_http_front_serves_pages() {
    let config = SiteConfig {
        api_base_url: spawn_api().await,
        ..SiteConfig::default()
    };
    let site = Arc::new(OrderSite::from_config(&config).expect("Failed to build site"));
    assert_eq!(site.detail_route(), "/details.html");
    let front = spawn(site.router()).await;

    let client = reqwest::Client::new();

    let list = client
        .get(format!("{front}/"))
        .send()
        .await
        .expect("List request failed");
    assert!(list.status().is_success());
    let html = list.text().await.unwrap();
    assert!(html.contains("Ver Detalhes"));
    assert!(html.contains("<td>01/01/2024</td>"));

    let detail = client
        .get(format!("{front}/details.html?order_id=1"))
        .send()
        .await
        .expect("Detail request failed");
    assert!(detail.status().is_success());
    let html = detail.text().await.unwrap();
    assert!(html.contains("Quantidade: 2"));
    assert!(html.contains("value=\"A B\""));

    // A failed load still serves the page, with the error block.
    let failed = client
        .get(format!("{front}/details.html?order_id=9"))
        .send()
        .await
        .unwrap();
    assert!(failed.status().is_success());
    assert!(failed.text().await.unwrap().contains("Ocorreu um erro"));
}

/// A configured detail page moves both the list links and the served route.
#[tokio::test]
async fn test_http_front_serves_configured_detail_page() {
    let config = SiteConfig {
        api_base_url: spawn_api().await,
        detail_page: "pedidos/detalhe.html".into(),
        ..SiteConfig::default()
    };
    config.validate().expect("Config should be valid");
    let site = Arc::new(OrderSite::from_config(&config).expect("Failed to build site"));
    assert_eq!(site.detail_route(), "/pedidos/detalhe.html");
    let front = spawn(site.router()).await;

    let client = reqwest::Client::new();

    let list = client
        .get(format!("{front}/index.html"))
        .send()
        .await
        .expect("List request failed");
    let html = list.text().await.unwrap();
    assert!(html.contains("href=\"pedidos/detalhe.html?order_id=1\""));

    let detail = client
        .get(format!("{front}/pedidos/detalhe.html?order_id=1"))
        .send()
        .await
        .expect("Detail request failed");
    assert!(detail.status().is_success());
    let html = detail.text().await.unwrap();
    assert!(html.contains("Quantidade: 2"));
    assert!(html.contains("<div id=\"loader\" style=\"display: none\">"));

    let default_route = client
        .get(format!("{front}/details.html?order_id=1"))
        .send()
        .await
        .unwrap();
    assert_eq!(default_route.status(), reqwest::StatusCode::NOT_FOUND);
}
