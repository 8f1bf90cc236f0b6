//! User account module
//!
//! This service only touches the cart projection of the account store:
//! the cart is read for compensation snapshots, cleared on order placement
//! and restored when checkout-session creation fails.

pub mod models;
pub mod repository;

pub use models::{CartData, UserCart};
pub use repository::UserRepository;
