use axum::{Json, extract::State, http::StatusCode};
use db::models::Order;
use services::{OrderService, payload::OrderPayload};
use util::state::AppState;

use crate::extract::Envelope;
use crate::response::{ApiError, ApiResponse};

/// POST /orders
///
/// Creates an order. The server assigns the id; a missing `status` defaults
/// to `pending`.
///
/// ### Request Body
/// ```json
/// {
///   "data": {
///     "deliverTo": "308 Negra Arroyo Lane",
///     "mobileNumber": "(505) 143-3369",
///     "dishes": [ { "id": "90c3d873...", "quantity": 2 } ]
///   }
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored order under `data`
/// - `400 Bad Request`, e.g.
///   `{ "error": "Dish 0 must have a quantity that is an integer greater than 0" }`
pub async fn create_order(
    State(app_state): State<AppState>,
    Envelope(payload): Envelope<OrderPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Order>>), ApiError> {
    let order = OrderService::create(app_state.orders(), payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(order))))
}
