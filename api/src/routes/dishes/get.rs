use axum::{
    Extension, Json,
    extract::State,
    response::IntoResponse,
};
use db::models::Dish;
use services::{DishService, OrderService};
use util::state::AppState;

use crate::response::ApiResponse;

/// GET /dishes
///
/// Lists every dish in store order.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "data": [ { "id": "d351db2b...", "name": "Dolcelatte and chickpea spaghetti", "price": 19, ... } ] }
/// ```
pub async fn list_dishes(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(DishService::list(app_state.dishes()).await))
}

/// GET /dishes/{dish_id}
///
/// ### Responses
/// - `200 OK` with the dish under `data`
/// - `404 Not Found`: `{ "error": "Dish does not exist: {dish_id}." }`
pub async fn get_dish(Extension(dish): Extension<Dish>) -> impl IntoResponse {
    Json(ApiResponse::success(dish))
}

/// GET /dishes/{dish_id}/orders
///
/// Lists the orders with at least one line for this dish, in store order.
///
/// ### Responses
/// - `200 OK` with the matching orders under `data` (possibly empty)
/// - `404 Not Found` when the dish does not exist
pub async fn list_dish_orders(
    State(app_state): State<AppState>,
    Extension(dish): Extension<Dish>,
) -> impl IntoResponse {
    let orders = OrderService::list(app_state.orders(), Some(&dish.id)).await;
    Json(ApiResponse::success(orders))
}
