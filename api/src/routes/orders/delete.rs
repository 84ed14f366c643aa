use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use services::OrderService;
use util::state::AppState;

use crate::response::ApiError;

/// DELETE /orders/{order_id}
///
/// ### Responses
/// - `204 No Content`
/// - `400 Bad Request`: `{ "error": "An order cannot be deleted unless it is pending" }`
/// - `404 Not Found` when the order does not exist
pub async fn delete_order(
    State(app_state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    OrderService::delete(app_state.orders(), &order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
