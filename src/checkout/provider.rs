//! Checkout provider seam

use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use super::manifest::LineItem;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Processor rejected the session: {0}")]
    Rejected(String),
    #[error("Session response carried no hosted URL")]
    MissingUrl,
}

/// Parameters for a hosted checkout session.
#[derive(Debug, Clone)]
pub struct SessionRequest {
    pub line_items: Vec<LineItem>,
    pub currency: String,
    /// Processor session mode; this service only ever uses `payment`
    pub mode: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// A created hosted checkout session.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub id: String,
    /// URL of the processor-hosted payment page the client redirects to
    pub url: String,
}

/// A client capable of opening hosted checkout sessions.
///
/// Constructed once at startup and injected into the gateway state; no
/// global client instance exists.
#[async_trait]
pub trait CheckoutProvider: Send + Sync + Debug {
    async fn create_session(
        &self,
        request: &SessionRequest,
    ) -> Result<CheckoutSession, CheckoutError>;
}

/// Mock provider for tests: hands out sessions against a fake hosted page,
/// or fails every request when constructed with [`MockCheckout::failing`].
#[derive(Debug, Default)]
pub struct MockCheckout {
    fail: bool,
}

impl MockCheckout {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl CheckoutProvider for MockCheckout {
    async fn create_session(
        &self,
        request: &SessionRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        if self.fail {
            return Err(CheckoutError::Network(
                "mock checkout configured to fail".to_string(),
            ));
        }
        if request.line_items.is_empty() {
            return Err(CheckoutError::Rejected("empty line item list".to_string()));
        }

        let id = format!("cs_test_{}", uuid::Uuid::new_v4().simple());
        Ok(CheckoutSession {
            url: format!("https://checkout.mock.local/c/pay/{}", id),
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> SessionRequest {
        SessionRequest {
            line_items: vec![LineItem {
                name: "Greek Salad".to_string(),
                unit_amount: 85000,
                quantity: 1,
            }],
            currency: "inr".to_string(),
            mode: "payment".to_string(),
            success_url: "http://localhost:5173/verify?success=true&orderId=1".to_string(),
            cancel_url: "http://localhost:5173/verify?success=false&orderId=1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_session_has_hosted_url() {
        let provider = MockCheckout::new();
        let session = provider.create_session(&sample_request()).await.unwrap();
        assert!(session.id.starts_with("cs_test_"));
        assert!(session.url.contains(&session.id));
    }

    #[tokio::test]
    async fn test_failing_mock_returns_network_error() {
        let provider = MockCheckout::failing();
        let result = provider.create_session(&sample_request()).await;
        assert!(matches!(result, Err(CheckoutError::Network(_))));
    }

    #[tokio::test]
    async fn test_mock_rejects_empty_manifest() {
        let provider = MockCheckout::new();
        let mut request = sample_request();
        request.line_items.clear();
        let result = provider.create_session(&request).await;
        assert!(matches!(result, Err(CheckoutError::Rejected(_))));
    }
}
