use axum::{Json, extract::State, http::StatusCode};
use db::models::Dish;
use services::{DishService, payload::DishPayload};
use util::state::AppState;

use crate::extract::Envelope;
use crate::response::{ApiError, ApiResponse};

/// POST /dishes
///
/// Creates a dish. Any `id` in the body is ignored; the server assigns one.
///
/// ### Request Body
/// ```json
/// { "data": { "name": "Taco", "description": "Crunchy", "price": 5, "image_url": "taco.png" } }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored dish under `data`
/// - `400 Bad Request` naming the first missing or invalid field, e.g.
///   `{ "error": "Dish must include a price, numeral and > 0" }`
pub async fn create_dish(
    State(app_state): State<AppState>,
    Envelope(payload): Envelope<DishPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Dish>>), ApiError> {
    let dish = DishService::create(app_state.dishes(), payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(dish))))
}
