//! Hosted checkout integration
//!
//! The payment processor hosts the actual payment page; this module only
//! builds the line-item manifest and opens a session. The provider is a
//! trait so handlers never see a concrete client:
//!
//! - [`StripeCheckout`] - the real processor client (HTTP, form-encoded)
//! - [`MockCheckout`] - deterministic in-process stand-in for tests

pub mod manifest;
pub mod provider;
pub mod stripe;

pub use manifest::{DELIVERY_LINE_NAME, LineItem, build_line_items, to_minor_units};
pub use provider::{CheckoutError, CheckoutProvider, CheckoutSession, MockCheckout, SessionRequest};
pub use stripe::StripeCheckout;
