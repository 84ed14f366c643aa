pub mod dish;
pub mod order;

pub use dish::Dish;
pub use order::{Order, OrderDish};
