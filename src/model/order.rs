//! Order records as returned by the order-management API.
//!
//! These are read-only projections: nothing here is created or mutated by the
//! renderers. The detail endpoint returns a full [`Order`]; list entries are
//! decoded into the narrower [`OrderSummary`] so a list payload that omits
//! items, payment or shipping still renders.
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Identifier of an order as the API reports it.
///
/// The API is not consistent about the JSON type (number in some payloads,
/// string in others), so the id is kept as its textual form and displayed
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        text_or_number(deserializer).map(OrderId)
    }
}

/// Reads a field that some payloads send as a JSON number and others as a string.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

/// Customer name as carried by list entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerName {
    pub first_name: String,
    pub last_name: String,
}

/// One row of the order list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub order_date: String,
    pub order_status: String,
    pub customer: CustomerName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl CustomerName {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A line item. `quantity` and `unit_price` accept numbers or numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub method: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    #[serde(deserialize_with = "text_or_number")]
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    #[serde(deserialize_with = "text_or_number")]
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipping {
    pub method: String,
    pub cost: Decimal,
    pub expected_delivery_date: String,
    pub address: Address,
}

/// Full order as returned by `GET /orders/{order_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub order_date: String,
    pub order_status: String,
    pub customer: Customer,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub payment: Payment,
    pub shipping: Shipping,
}
