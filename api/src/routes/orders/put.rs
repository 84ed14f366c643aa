use axum::{
    Json,
    extract::{Path, State},
};
use db::models::Order;
use services::{OrderService, payload::OrderPayload};
use util::state::AppState;

use crate::extract::Envelope;
use crate::response::{ApiError, ApiResponse};

/// PUT /orders/{order_id}
///
/// Replaces the order's fields. `status` is required to be present and not
/// `invalid`; a body `id`, when present, must equal `{order_id}`.
///
/// ### Responses
/// - `200 OK` with the updated order under `data`
/// - `400 Bad Request` naming the first failed check
/// - `404 Not Found` when the order does not exist
pub async fn update_order(
    State(app_state): State<AppState>,
    Path(order_id): Path<String>,
    Envelope(payload): Envelope<OrderPayload>,
) -> Result<Json<ApiResponse<Order>>, ApiError> {
    let order = OrderService::update(app_state.orders(), &order_id, payload).await?;
    Ok(Json(ApiResponse::success(order)))
}
