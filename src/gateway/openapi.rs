//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:4000/docs`
//! - OpenAPI JSON: `http://localhost:4000/api-docs/openapi.json`

use utoipa::OpenApi;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CraveCart Order API",
        version = "1.0.0",
        description = "Order placement, checkout-session creation and payment verification for the CraveCart food-ordering app.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:4000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::place_order,
        crate::gateway::handlers::verify_order,
        crate::gateway::handlers::user_orders,
    ),
    tags(
        (name = "Orders", description = "Order placement, verification and history"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
