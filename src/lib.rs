//! CraveCart - Food-Ordering Backend
//!
//! Order placement and hosted-checkout service for the CraveCart app.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - Rolling-file tracing setup
//! - [`db`] - PostgreSQL connection pool
//! - [`account`] - User cart projection (read/clear/restore)
//! - [`order`] - Order models, repository and service
//! - [`checkout`] - Hosted checkout provider (Stripe client + mock)
//! - [`gateway`] - HTTP API (axum router, handlers, DTOs)

pub mod account;
pub mod checkout;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod order;

// Convenient re-exports at crate root
pub use checkout::{CheckoutProvider, CheckoutSession, MockCheckout, StripeCheckout};
pub use config::{AppConfig, CheckoutConfig, GatewayConfig};
pub use db::Database;
pub use order::{DeliveryAddress, Order, OrderItem, OrderService, PaymentOutcome};
