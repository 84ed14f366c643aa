use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::store::Record;

/// A dish on the menu.
///
/// `price` keeps the numeric representation the client sent (`5` stays `5`,
/// `5.5` stays `5.5`).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl Record for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}
