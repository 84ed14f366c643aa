use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use util::state::AppState;

pub trait Seeder {
    /// Loads fixture records into `state`, returning how many were added.
    fn seed<'a>(&'a self, state: &'a AppState) -> Pin<Box<dyn Future<Output = usize> + Send + 'a>>;
}

pub async fn run_seeder<S: Seeder + ?Sized>(seeder: &S, name: &str, state: &AppState) {
    let start = Instant::now();
    let added = seeder.seed(state).await;
    tracing::info!(
        seeder = name,
        added,
        elapsed = ?start.elapsed(),
        "Seeding {} done",
        name
    );
}
