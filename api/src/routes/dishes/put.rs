use axum::{
    Json,
    extract::{Path, State},
};
use db::models::Dish;
use services::{DishService, payload::DishPayload};
use util::state::AppState;

use crate::extract::Envelope;
use crate::response::{ApiError, ApiResponse};

/// PUT /dishes/{dish_id}
///
/// Replaces the dish's fields. The identifier never changes; a body `id`, when
/// present, must equal `{dish_id}`.
///
/// ### Responses
/// - `200 OK` with the updated dish under `data`
/// - `400 Bad Request` for a missing field or an id mismatch:
///   `{ "error": "Dish id does not match route id. Dish: 456, Route: 123" }`
/// - `404 Not Found` when the dish does not exist
pub async fn update_dish(
    State(app_state): State<AppState>,
    Path(dish_id): Path<String>,
    Envelope(payload): Envelope<DishPayload>,
) -> Result<Json<ApiResponse<Dish>>, ApiError> {
    let dish = DishService::update(app_state.dishes(), &dish_id, payload).await?;
    Ok(Json(ApiResponse::success(dish)))
}
