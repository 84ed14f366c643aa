//! Request validation and store mutation for the dish and order resources.
//!
//! Each operation runs an ordered [`validation::Chain`] over the request
//! payload and only touches the store once every step has passed.

pub mod dish_service;
pub mod error;
pub mod order_service;
pub mod payload;
pub mod validation;

pub use dish_service::DishService;
pub use error::ServiceError;
pub use order_service::OrderService;
