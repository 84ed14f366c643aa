//! # Orders Routes Module
//!
//! Routes for the `/orders` endpoint group. Every route under
//! `/orders/{order_id}` runs `order_exists` first.

use axum::{Router, middleware::from_fn_with_state, routing::get};
use delete::delete_order;
use get::{get_order, list_orders};
use post::create_order;
use put::update_order;
use util::state::AppState;

use crate::middleware::order_exists;
use crate::routes::fallback::method_not_allowed;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/orders` route group.
///
/// - `GET /orders` → `list_orders`
/// - `POST /orders` → `create_order`
/// - `GET /orders/{order_id}` → `get_order`
/// - `PUT /orders/{order_id}` → `update_order`
/// - `DELETE /orders/{order_id}` → `delete_order`
pub fn orders_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_orders)
                .post(create_order)
                .fallback(method_not_allowed),
        )
        .route(
            "/{order_id}",
            get(get_order)
                .put(update_order)
                .delete(delete_order)
                .route_layer(from_fn_with_state(app_state, order_exists))
                .fallback(method_not_allowed),
        )
}
