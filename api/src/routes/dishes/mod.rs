//! # Dishes Routes Module
//!
//! Routes for the `/dishes` endpoint group.
//!
//! ## Structure
//! - `get.rs`: GET handlers (list, read, orders for a dish)
//! - `post.rs`: POST handlers (create)
//! - `put.rs`: PUT handlers (update)
//!
//! ## Middleware
//! Every route under `/dishes/{dish_id}` runs `dish_exists` first, so the
//! handlers receive the resolved dish through `Extension<Dish>`.

use axum::{Router, middleware::from_fn_with_state, routing::get};
use get::{get_dish, list_dish_orders, list_dishes};
use post::create_dish;
use put::update_dish;
use util::state::AppState;

use crate::middleware::dish_exists;
use crate::routes::fallback::method_not_allowed;

pub mod get;
pub mod post;
pub mod put;

/// Builds the `/dishes` route group.
///
/// - `GET /dishes` → `list_dishes`
/// - `POST /dishes` → `create_dish`
/// - `GET /dishes/{dish_id}` → `get_dish`
/// - `PUT /dishes/{dish_id}` → `update_dish`
/// - `GET /dishes/{dish_id}/orders` → `list_dish_orders`
pub fn dishes_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_dishes)
                .post(create_dish)
                .fallback(method_not_allowed),
        )
        .route(
            "/{dish_id}",
            get(get_dish)
                .put(update_dish)
                .route_layer(from_fn_with_state(app_state.clone(), dish_exists))
                .fallback(method_not_allowed),
        )
        .route(
            "/{dish_id}/orders",
            get(list_dish_orders)
                .route_layer(from_fn_with_state(app_state, dish_exists))
                .fallback(method_not_allowed),
        )
}
