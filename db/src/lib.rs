//! In-memory resource stores for the dish and order collections.
//!
//! Records live for the lifetime of the process inside a [`Store`], an ordered
//! collection guarded by an async `RwLock` so every read-modify-write runs as a
//! single critical section.

pub mod id;
pub mod models;
pub mod store;

pub use id::next_id;
pub use store::{Record, Store};
