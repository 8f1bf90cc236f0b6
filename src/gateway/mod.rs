//! HTTP gateway
//!
//! Assembles the axum router over the shared [`AppState`] and serves the
//! order API plus Swagger UI.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let order_routes = Router::new()
        .route("/place", post(handlers::place_order))
        .route("/verify", post(handlers::verify_order))
        .route("/user", post(handlers::user_orders));

    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .nest("/api/v1/order", order_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> std::io::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app).await
}
