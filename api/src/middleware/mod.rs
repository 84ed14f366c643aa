//! Request middleware: access logging and route-parameter resolution.

pub mod logging;
pub mod lookup;

pub use logging::log_request;
pub use lookup::{dish_exists, order_exists};
