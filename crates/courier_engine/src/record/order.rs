use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::{
    record::status::{MealWindow, OrderStatus},
    utils,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub line1: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Human order number, sent upstream either as text or as a bare number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum OrderNumber {
    Text(String),
    Numeric(u64),
}

impl From<&str> for OrderNumber {
    fn from(value: &str) -> Self {
        OrderNumber::Text(value.to_owned())
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderNumber::Text(text) => f.write_str(text),
            OrderNumber::Numeric(number) => write!(f, "{number}"),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub order_number: Option<OrderNumber>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub status: OrderStatus,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub meal_window: MealWindow,
    pub kitchen_id: Option<String>,
    pub batch_id: Option<String>,
    pub delivery_address: Option<DeliveryAddress>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// The order number, or the last 6 characters of the id when the number
    /// is missing.
    pub fn label(&self) -> String {
        order_label(Some(self), &self.id)
    }

    pub fn contact_name(&self) -> Option<&str> {
        self.delivery_address
            .as_ref()
            .and_then(|address| address.contact_name.as_deref())
    }

    pub fn is_batched(&self) -> bool {
        self.batch_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Label for an order known only by id, optionally resolved to its record.
pub fn order_label(order: Option<&Order>, order_id: &str) -> String {
    order
        .and_then(|order| order.order_number.as_ref())
        .map(OrderNumber::to_string)
        .filter(|number| !number.is_empty())
        .unwrap_or_else(|| utils::short_id(order_id, 6).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_order() {
        let json = r#"{
            "_id": "65a1f0c2e4b0a1b2c3d4aaaa",
            "orderNumber": "ORD-0001",
            "status": "PREPARING",
            "mealWindow": "DINNER",
            "deliveryAddress": { "contactName": "Alex", "contactPhone": "555" },
            "items": [{ "name": "Thali" }]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.meal_window, MealWindow::Dinner);
        assert_eq!(order.contact_name(), Some("Alex"));
        assert_eq!(order.items[0].quantity, 1);
        assert!(!order.is_batched());
    }

    #[test]
    fn test_label() {
        let order = Order {
            id: String::from("65a1f0c2e4b0a1b2c3d4aaaa"),
            order_number: Some(OrderNumber::from("ORD-0001")),
            ..Order::default()
        };
        assert_eq!(order.label(), "ORD-0001");

        let order = Order {
            order_number: None,
            ..order
        };
        assert_eq!(order.label(), "d4aaaa");

        assert_eq!(order_label(None, "xyz123456"), "123456");
    }

    #[test]
    fn test_empty_batch_id_is_not_batched() {
        let order = Order {
            batch_id: Some(String::new()),
            ..Order::default()
        };
        assert!(!order.is_batched());
    }

    #[test]
    fn test_numeric_order_number() {
        let json = r#"{ "_id": "o1", "orderNumber": 1001, "status": null, "items": null }"#;

        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.order_number, Some(OrderNumber::Numeric(1001)));
        assert_eq!(order.label(), "1001");
        assert_eq!(order.status, OrderStatus::Unknown);
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_empty_order_number_falls_back_to_id() {
        let order = Order {
            id: String::from("65a1f0c2e4b0a1b2c3d4bbbb"),
            order_number: Some(OrderNumber::from("")),
            ..Order::default()
        };

        assert_eq!(order.label(), "d4bbbb");
    }
}
