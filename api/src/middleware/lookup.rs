//! Route-parameter resolution.
//!
//! Each middleware resolves the identifier in the path to a stored record
//! before the handler runs. A missing record short-circuits with 404; a found
//! record is attached to the request extensions so handlers can take it with
//! `Extension<Dish>` / `Extension<Order>` without looking it up again.

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use services::{DishService, OrderService};
use util::state::AppState;

use crate::response::ApiError;

/// Resolves `{dish_id}` to the stored dish.
pub async fn dish_exists(
    State(app_state): State<AppState>,
    Path(dish_id): Path<String>,
    mut req: Request,
    next: Next,
) -> Response {
    match DishService::find(app_state.dishes(), &dish_id).await {
        Ok(dish) => {
            req.extensions_mut().insert(dish);
            next.run(req).await
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// Resolves `{order_id}` to the stored order.
pub async fn order_exists(
    State(app_state): State<AppState>,
    Path(order_id): Path<String>,
    mut req: Request,
    next: Next,
) -> Response {
    match OrderService::find(app_state.orders(), &order_id).await {
        Ok(order) => {
            req.extensions_mut().insert(order);
            next.run(req).await
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}
