use axum::{Json, Router, response::IntoResponse, routing::get};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::fallback::method_not_allowed;

/// Builds the `/health` route group: a single `GET /health` for uptime checks.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check).fallback(method_not_allowed))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "data": "OK" }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK"))
}
