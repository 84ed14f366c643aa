//! HTTP route entry point.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/dishes` → Dish listing, creation, retrieval and update
//! - `/orders` → Order listing, creation, retrieval, update and deletion
//!
//! Paths outside these groups answer 404; unsupported verbs on a known path
//! answer 405.

use axum::Router;
use util::state::AppState;

use crate::routes::{
    dishes::dishes_routes, fallback::not_found, health::health_routes, orders::orders_routes,
};

pub mod dishes;
pub mod fallback;
pub mod health;
pub mod orders;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    let router = Router::new()
        .nest("/health", health_routes())
        .nest("/dishes", dishes_routes(app_state.clone()))
        .nest("/orders", orders_routes(app_state.clone()))
        .fallback(not_found)
        .with_state(app_state);

    tracing::info!("Mounted /health, /dishes and /orders routes");
    router
}
