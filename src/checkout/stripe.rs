//! Stripe Checkout Sessions client
//!
//! Talks to `POST {api_base}/v1/checkout/sessions` with the secret key as
//! bearer auth. Stripe takes form-encoded bodies with bracketed field
//! names, so the session request is flattened into key/value pairs rather
//! than serialized as JSON.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::provider::{CheckoutError, CheckoutProvider, CheckoutSession, SessionRequest};

/// Hosted checkout client for the Stripe Checkout Sessions API.
#[derive(Debug)]
pub struct StripeCheckout {
    client: reqwest::Client,
    api_base: String,
    secret_key: String,
}

/// Session object as returned by the processor (only the fields we read).
#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    /// Absent on sessions in states that carry no hosted page
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

impl StripeCheckout {
    pub fn new(
        api_base: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, CheckoutError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CheckoutError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            secret_key: secret_key.into(),
        })
    }

    /// Flatten a session request into the processor's bracketed form fields:
    /// `line_items[i][price_data][unit_amount]` and friends.
    fn form_fields(request: &SessionRequest) -> Vec<(String, String)> {
        let mut fields = vec![
            ("mode".to_string(), request.mode.clone()),
            ("success_url".to_string(), request.success_url.clone()),
            ("cancel_url".to_string(), request.cancel_url.clone()),
        ];

        for (i, line) in request.line_items.iter().enumerate() {
            fields.push((
                format!("line_items[{}][price_data][currency]", i),
                request.currency.clone(),
            ));
            fields.push((
                format!("line_items[{}][price_data][product_data][name]", i),
                line.name.clone(),
            ));
            fields.push((
                format!("line_items[{}][price_data][unit_amount]", i),
                line.unit_amount.to_string(),
            ));
            fields.push((format!("line_items[{}][quantity]", i), line.quantity.to_string()));
        }

        fields
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    async fn create_session(
        &self,
        request: &SessionRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        let url = format!("{}/v1/checkout/sessions", self.api_base);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&Self::form_fields(request))
            .send()
            .await
            .map_err(|e| CheckoutError::Network(format!("Session request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiErrorResponse>()
                .await
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(CheckoutError::Rejected(detail));
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| CheckoutError::Network(format!("Failed to parse session response: {}", e)))?;

        let hosted_url = session.url.ok_or(CheckoutError::MissingUrl)?;
        Ok(CheckoutSession {
            id: session.id,
            url: hosted_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::manifest::LineItem;

    fn sample_request() -> SessionRequest {
        SessionRequest {
            line_items: vec![
                LineItem {
                    name: "Greek Salad".to_string(),
                    unit_amount: 85000,
                    quantity: 2,
                },
                LineItem {
                    name: "Delivery Charges".to_string(),
                    unit_amount: 1700000,
                    quantity: 1,
                },
            ],
            currency: "inr".to_string(),
            mode: "payment".to_string(),
            success_url: "http://localhost:5173/verify?success=true&orderId=5".to_string(),
            cancel_url: "http://localhost:5173/verify?success=false&orderId=5".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = StripeCheckout::new("https://api.stripe.com", "sk_test_123");
        assert!(client.is_ok());
    }

    #[test]
    fn test_form_fields_flattening() {
        let fields = StripeCheckout::form_fields(&sample_request());

        // 3 top-level fields + 4 per line item
        assert_eq!(fields.len(), 3 + 2 * 4);

        let get = |key: &str| {
            fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("mode"), Some("payment"));
        assert_eq!(
            get("success_url"),
            Some("http://localhost:5173/verify?success=true&orderId=5")
        );
        assert_eq!(get("line_items[0][price_data][currency]"), Some("inr"));
        assert_eq!(
            get("line_items[0][price_data][product_data][name]"),
            Some("Greek Salad")
        );
        assert_eq!(get("line_items[0][price_data][unit_amount]"), Some("85000"));
        assert_eq!(get("line_items[0][quantity]"), Some("2"));
        assert_eq!(get("line_items[1][price_data][unit_amount]"), Some("1700000"));
        assert_eq!(get("line_items[1][quantity]"), Some("1"));
    }
}
