use axum::{Extension, Json, extract::State, response::IntoResponse};
use db::models::Order;
use services::OrderService;
use util::state::AppState;

use crate::response::ApiResponse;

/// GET /orders
///
/// Lists every order in store order.
pub async fn list_orders(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(OrderService::list(app_state.orders(), None).await))
}

/// GET /orders/{order_id}
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "data": {
///     "id": "f6069a54...",
///     "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
///     "mobileNumber": "(202) 456-1111",
///     "status": "out-for-delivery",
///     "dishes": [ { "id": "d351db2b...", "quantity": 2, ... } ]
///   }
/// }
/// ```
/// - `404 Not Found`: `{ "error": "Order does not exist: {order_id}." }`
pub async fn get_order(Extension(order): Extension<Order>) -> impl IntoResponse {
    Json(ApiResponse::success(order))
}
