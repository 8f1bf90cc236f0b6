//! Order endpoint DTOs and boundary validation
//!
//! Wire field names are camelCase, matching what the frontend already
//! sends (`userId`, `orderId`, ...).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::{DeliveryAddress, Order, OrderItem, PaymentOutcome};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Place-order request: the cart snapshot the frontend submits.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub user_id: i64,
    pub items: Vec<OrderItem>,
    /// Order total in major currency units
    pub amount: Decimal,
    pub address: DeliveryAddress,
}

/// Verify request: order id plus the outcome string the redirect carried.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOrderRequest {
    pub order_id: i64,
    pub success: String,
}

impl VerifyOrderRequest {
    /// Parse the loosely-typed redirect flag into a typed outcome.
    pub fn outcome(&self) -> PaymentOutcome {
        PaymentOutcome::from(self.success.as_str())
    }
}

/// Order-history request: explicit user scope plus optional pagination.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOrdersRequest {
    pub user_id: i64,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

impl UserOrdersRequest {
    /// Resolve pagination with defaults applied and the limit capped.
    pub fn page(&self) -> (i64, i64) {
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
        let offset = self.offset.unwrap_or(0);
        (i64::from(limit), i64::from(offset))
    }
}

/// Validate a place-order request before any I/O happens.
pub fn validate_place_order(req: &PlaceOrderRequest) -> Result<(), &'static str> {
    if req.items.is_empty() {
        return Err("Order must contain at least one item");
    }
    for item in &req.items {
        if item.name.is_empty() {
            return Err("Item name cannot be empty");
        }
        if item.price <= Decimal::ZERO {
            return Err("Item price must be greater than zero");
        }
        if item.quantity == 0 {
            return Err("Item quantity must be greater than zero");
        }
    }
    if req.amount <= Decimal::ZERO {
        return Err("Amount must be greater than zero");
    }
    Ok(())
}

/// Session payload flattened into the success envelope.
#[derive(Debug, Serialize)]
pub struct SessionData {
    pub session_url: String,
}

/// Order-history payload flattened into the success envelope.
#[derive(Debug, Serialize)]
pub struct OrdersData {
    pub data: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_place_request() -> &'static str {
        r#"{
            "userId": 42,
            "items": [
                {"name": "Greek Salad", "price": 12, "quantity": 2},
                {"name": "Veg Rolls", "price": 18, "quantity": 1}
            ],
            "amount": 42,
            "address": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "street": "12 Analytical Row",
                "city": "London",
                "state": "LDN",
                "zipcode": "E1 6AN",
                "country": "UK",
                "phone": "+44 20 7946 0000"
            }
        }"#
    }

    #[test]
    fn test_place_request_deserializes_camel_case() {
        let req: PlaceOrderRequest = serde_json::from_str(wire_place_request()).unwrap();
        assert_eq!(req.user_id, 42);
        assert_eq!(req.items.len(), 2);
        assert_eq!(req.amount, Decimal::from(42));
        assert!(validate_place_order(&req).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_items() {
        let mut req: PlaceOrderRequest = serde_json::from_str(wire_place_request()).unwrap();
        req.items.clear();
        assert_eq!(
            validate_place_order(&req),
            Err("Order must contain at least one item")
        );
    }

    #[test]
    fn test_validate_rejects_zero_price() {
        let mut req: PlaceOrderRequest = serde_json::from_str(wire_place_request()).unwrap();
        req.items[0].price = Decimal::ZERO;
        assert!(validate_place_order(&req).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let mut req: PlaceOrderRequest = serde_json::from_str(wire_place_request()).unwrap();
        req.items[1].quantity = 0;
        assert!(validate_place_order(&req).is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let mut req: PlaceOrderRequest = serde_json::from_str(wire_place_request()).unwrap();
        req.amount = Decimal::from(-1);
        assert!(validate_place_order(&req).is_err());
    }

    #[test]
    fn test_verify_request_outcome_parsing() {
        let req: VerifyOrderRequest =
            serde_json::from_str(r#"{"orderId": 7, "success": "true"}"#).unwrap();
        assert_eq!(req.order_id, 7);
        assert_eq!(req.outcome(), PaymentOutcome::Succeeded);

        let req: VerifyOrderRequest =
            serde_json::from_str(r#"{"orderId": 7, "success": "false"}"#).unwrap();
        assert_eq!(req.outcome(), PaymentOutcome::Failed);

        // anything that is not the literal "true" fails
        let req: VerifyOrderRequest =
            serde_json::from_str(r#"{"orderId": 7, "success": "yes"}"#).unwrap();
        assert_eq!(req.outcome(), PaymentOutcome::Failed);
    }

    #[test]
    fn test_pagination_defaults_and_cap() {
        let req: UserOrdersRequest = serde_json::from_str(r#"{"userId": 1}"#).unwrap();
        assert_eq!(req.page(), (20, 0));

        let req: UserOrdersRequest =
            serde_json::from_str(r#"{"userId": 1, "limit": 500, "offset": 40}"#).unwrap();
        assert_eq!(req.page(), (100, 40));
    }
}
