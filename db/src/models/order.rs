use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::store::Record;

/// The only status from which an order may be deleted.
pub const STATUS_PENDING: &str = "pending";

/// Status values a client may use. Anything other than [`STATUS_INVALID`] is
/// accepted on update; this list only feeds the error message.
pub const KNOWN_STATUSES: [&str; 4] = ["pending", "preparing", "out-for-delivery", "delivered"];

/// Sentinel status that is always rejected on update.
pub const STATUS_INVALID: &str = "invalid";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: String,
    pub dishes: Vec<OrderDish>,
}

impl Order {
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }

    /// Whether any line of this order refers to the dish with `dish_id`.
    pub fn contains_dish(&self, dish_id: &str) -> bool {
        self.dishes.iter().any(|d| d.id.as_deref() == Some(dish_id))
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One line of an order: a copy of the ordered dish plus its quantity.
///
/// Only `quantity` is required; the dish fields are carried as the client sent them.
/// The quantity keeps the client's numeric form, so `2.0` stays `2.0`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct OrderDish {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    pub quantity: Number,
}
