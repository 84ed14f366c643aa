//! Fixture data loaded into the stores at startup.

mod seed;
mod seeds;

pub use seed::{Seeder, run_seeder};
pub use seeds::{dish::DishSeeder, order::OrderSeeder};

use util::state::AppState;

/// Seeds dishes, then orders.
pub async fn seed_all(state: &AppState) {
    for (seeder, name) in [
        (Box::new(DishSeeder) as Box<dyn Seeder + Send + Sync>, "Dish"),
        (Box::new(OrderSeeder), "Order"),
    ] {
        run_seeder(&*seeder, name, state).await;
    }
}
