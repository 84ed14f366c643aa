//! Application state container shared across Axum route handlers and services.
//!
//! `AppState` owns the handles to both resource stores. It is cloned into every
//! handler via Axum's `State<T>` extractor; clones share the same records.

use db::Store;
use db::models::{Dish, Order};

/// Central application state shared across the server.
#[derive(Clone, Default)]
pub struct AppState {
    dishes: Store<Dish>,
    orders: Store<Order>,
}

impl AppState {
    /// Creates a state with two empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dishes(&self) -> &Store<Dish> {
        &self.dishes
    }

    pub fn orders(&self) -> &Store<Order> {
        &self.orders
    }
}
