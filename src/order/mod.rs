//! Order module
//!
//! PostgreSQL-backed order records plus the service implementing the
//! place / verify / list operations.

pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use models::{DeliveryAddress, Order, OrderItem, PaymentOutcome};
pub use repository::OrderRepository;
pub use service::{OrderError, OrderService};
