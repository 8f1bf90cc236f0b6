//! Data models for the user cart projection

use std::collections::BTreeMap;

/// Per-user cart contents: item name mapped to quantity.
pub type CartData = BTreeMap<String, u32>;

/// The slice of a user row this service reads
#[derive(Debug, Clone)]
pub struct UserCart {
    pub user_id: i64,
    pub cart_data: CartData,
}

impl UserCart {
    pub fn is_empty(&self) -> bool {
        self.cart_data.is_empty()
    }

    /// Total number of units across all cart entries.
    pub fn total_quantity(&self) -> u64 {
        self.cart_data.values().map(|q| u64::from(*q)).sum()
    }
}
