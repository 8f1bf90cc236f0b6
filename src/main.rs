//! CraveCart backend entry point
//!
//! Startup sequence:
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │  Config  │───▶│ Postgres │───▶│ Checkout  │───▶│ Gateway  │
//! │  (YAML)  │    │  (pool)  │    │ (client)  │    │  (axum)  │
//! └──────────┘    └──────────┘    └───────────┘    └──────────┘
//! ```
//!
//! The checkout client is built once here and injected into the gateway
//! state; handlers never construct their own.

use std::sync::Arc;

use anyhow::Context;

use cravecart::checkout::{CheckoutProvider, StripeCheckout};
use cravecart::config::AppConfig;
use cravecart::db::Database;
use cravecart::gateway::{self, state::AppState};
use cravecart::logging;

/// Get run environment from command line (--env/-e argument)
fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = logging::init_logging(&config);

    tracing::info!(
        "Starting CraveCart backend in {} mode (build {})",
        env,
        env!("GIT_HASH")
    );

    config
        .checkout
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid checkout config: {}", e))?;

    let postgres_url = config
        .postgres_url
        .clone()
        .context("postgres_url missing from config")?;
    let db = Arc::new(
        Database::connect(&postgres_url)
            .await
            .context("Failed to connect to PostgreSQL")?,
    );
    db.init_schema().await.context("Failed to prepare schema")?;

    let secret_key =
        std::env::var("CHECKOUT_SECRET_KEY").context("CHECKOUT_SECRET_KEY not set")?;
    let checkout: Arc<dyn CheckoutProvider> = Arc::new(StripeCheckout::new(
        config.checkout.api_base.clone(),
        secret_key,
    )?);

    let state = Arc::new(AppState::new(db, checkout, config.checkout.clone()));

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, state)
        .await
        .context("Server error")?;

    Ok(())
}
