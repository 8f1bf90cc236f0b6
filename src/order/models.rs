//! Data models for orders

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced cart entry as the frontend submits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    /// Unit price in major currency units
    pub price: Decimal,
    pub quantity: u32,
}

/// Delivery address collected by the frontend's checkout form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub phone: String,
}

/// A persisted order record.
///
/// `payment` stays `false` until the verify endpoint flips it; an order
/// that never gets verified remains an unpaid record.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub order_id: i64,
    pub user_id: i64,
    pub items: Vec<OrderItem>,
    pub amount: Decimal,
    pub address: DeliveryAddress,
    pub payment: bool,
    pub created_at: DateTime<Utc>,
}

/// Client-reported checkout outcome.
///
/// The hosted checkout redirects back with `success=true|false` in the
/// query string, which the frontend forwards verbatim. Only the literal
/// string `"true"` counts as success; anything else is a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Succeeded,
    Failed,
}

impl From<&str> for PaymentOutcome {
    fn from(v: &str) -> Self {
        if v == "true" {
            PaymentOutcome::Succeeded
        } else {
            PaymentOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_outcome_from_str() {
        assert_eq!(PaymentOutcome::from("true"), PaymentOutcome::Succeeded);
        assert_eq!(PaymentOutcome::from("false"), PaymentOutcome::Failed);
        // strict comparison: case and whitespace matter
        assert_eq!(PaymentOutcome::from("TRUE"), PaymentOutcome::Failed);
        assert_eq!(PaymentOutcome::from(" true"), PaymentOutcome::Failed);
        assert_eq!(PaymentOutcome::from(""), PaymentOutcome::Failed);
        assert_eq!(PaymentOutcome::from("1"), PaymentOutcome::Failed);
    }

    #[test]
    fn test_order_item_deserializes_wire_json() {
        let json = r#"{"name":"Greek Salad","price":12.5,"quantity":2}"#;
        let item: OrderItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Greek Salad");
        assert_eq!(item.price, Decimal::new(125, 1));
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_delivery_address_camel_case_fields() {
        let json = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "street": "12 Analytical Row",
            "city": "London",
            "state": "LDN",
            "zipcode": "E1 6AN",
            "country": "UK",
            "phone": "+44 20 7946 0000"
        }"#;
        let address: DeliveryAddress = serde_json::from_str(json).unwrap();
        assert_eq!(address.first_name, "Ada");
        assert_eq!(address.zipcode, "E1 6AN");
    }
}
