//! Order endpoints (place, verify, list)

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::state::AppState;
use super::super::types::{
    ApiResponse, OrdersData, PlaceOrderRequest, SessionData, UserOrdersRequest,
    VerifyOrderRequest, validate_place_order,
};
use crate::order::PaymentOutcome;

pub const MSG_PAID: &str = "Paid";
pub const MSG_NOT_PAID: &str = "Not Paid";
pub const MSG_ERROR: &str = "Error";
const MSG_PLACE_FAILED: &str = "Failed to create checkout session. Please try again.";
const MSG_LIST_FAILED: &str = "Failed to fetch orders. Please try again.";

/// Place an order and open a hosted checkout session
///
/// POST /api/v1/order/place
///
/// The outcome travels in the body, not the status code: failures are
/// still HTTP 200 with `{success: false, message}`.
#[utoipa::path(
    post,
    path = "/api/v1/order/place",
    request_body(content = String, description = "Cart snapshot: {userId, items, amount, address}", content_type = "application/json"),
    responses(
        (status = 200, description = "Envelope with session_url on success", content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<Json<ApiResponse<SessionData>>, Json<ApiResponse<()>>> {
    if let Err(reason) = validate_place_order(&req) {
        return Err(Json(ApiResponse::<()>::failure(reason)));
    }

    let user_id = req.user_id;
    match state
        .orders
        .place_order(user_id, req.items, req.amount, req.address)
        .await
    {
        Ok(session_url) => Ok(Json(ApiResponse::ok(SessionData { session_url }))),
        Err(e) => {
            tracing::error!(user_id, "place order failed: {}", e);
            Err(Json(ApiResponse::<()>::failure(MSG_PLACE_FAILED)))
        }
    }
}

/// Apply the client-reported checkout outcome
///
/// POST /api/v1/order/verify
#[utoipa::path(
    post,
    path = "/api/v1/order/verify",
    request_body(content = String, description = "{orderId, success}", content_type = "application/json"),
    responses(
        (status = 200, description = "Paid / Not Paid / Error envelope", content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn verify_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyOrderRequest>,
) -> Json<ApiResponse<()>> {
    match state.orders.verify_order(req.order_id, req.outcome()).await {
        Ok(PaymentOutcome::Succeeded) => Json(ApiResponse::<()>::ok_message(MSG_PAID)),
        Ok(PaymentOutcome::Failed) => Json(ApiResponse::<()>::failure(MSG_NOT_PAID)),
        Err(e) => {
            tracing::error!(order_id = req.order_id, "verify order failed: {}", e);
            Json(ApiResponse::<()>::failure(MSG_ERROR))
        }
    }
}

/// A user's order history, newest first
///
/// POST /api/v1/order/user
#[utoipa::path(
    post,
    path = "/api/v1/order/user",
    request_body(content = String, description = "{userId, limit?, offset?}", content_type = "application/json"),
    responses(
        (status = 200, description = "Envelope with the order list in `data`", content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn user_orders(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UserOrdersRequest>,
) -> Result<Json<ApiResponse<OrdersData>>, Json<ApiResponse<()>>> {
    let (limit, offset) = req.page();
    match state.orders.user_orders(req.user_id, limit, offset).await {
        Ok(orders) => Ok(Json(ApiResponse::ok(OrdersData { data: orders }))),
        Err(e) => {
            tracing::error!(user_id = req.user_id, "list orders failed: {}", e);
            Err(Json(ApiResponse::<()>::failure(MSG_LIST_FAILED)))
        }
    }
}
