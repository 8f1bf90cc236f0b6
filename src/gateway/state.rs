use std::sync::Arc;

use crate::checkout::CheckoutProvider;
use crate::config::CheckoutConfig;
use crate::db::Database;
use crate::order::OrderService;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL pool (health checks)
    pub db: Arc<Database>,
    /// Order service: placement, verification, history
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(
        db: Arc<Database>,
        checkout: Arc<dyn CheckoutProvider>,
        checkout_config: CheckoutConfig,
    ) -> Self {
        let orders = Arc::new(OrderService::new(db.clone(), checkout, checkout_config));
        Self { db, orders }
    }
}
