//! Request payloads, decoded from the object under the `data` envelope key.
//!
//! Every field is optional and decoded leniently: a value of the wrong JSON
//! type decodes as `None`, so the validator that owns the field reports it
//! instead of the whole body being rejected by the decoder.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::ServiceError;

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decodes an array of order lines element by element, so one malformed line
/// does not hide the others. Anything but an array decodes as `None`.
fn lenient_lines<'de, D>(deserializer: D) -> Result<Option<Vec<OrderDishPayload>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        )),
        _ => Ok(None),
    }
}

fn required_text<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ServiceError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ServiceError::bad_request(message)),
    }
}

fn is_positive(number: &Number) -> bool {
    number.as_f64().is_some_and(|n| n > 0.0)
}

fn is_positive_integer(number: &Number) -> bool {
    number
        .as_f64()
        .is_some_and(|n| n.is_finite() && n.fract() == 0.0 && n > 0.0)
}

/// A body identifier counts as sent unless it is `null` or `""`. Any other
/// JSON value is kept as-is so a non-string id can never pass as absent.
fn sent_id(id: Option<&Value>) -> Option<&Value> {
    id.filter(|value| !value.is_null() && value.as_str() != Some(""))
}

/// Whether a sent body identifier names the route record.
pub fn id_matches(body_id: &Value, route_id: &str) -> bool {
    body_id.as_str() == Some(route_id)
}

/// Renders a body identifier for an error message: strings verbatim, any
/// other value as JSON.
pub fn display_id(body_id: &Value) -> String {
    match body_id {
        Value::String(id) => id.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DishPayload {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_url: Option<String>,
}

impl DishPayload {
    pub fn name(&self) -> Result<&str, ServiceError> {
        required_text(self.name.as_deref(), "Dish must include a name")
    }

    pub fn description(&self) -> Result<&str, ServiceError> {
        required_text(self.description.as_deref(), "Dish must include a description")
    }

    pub fn price(&self) -> Result<&Number, ServiceError> {
        match &self.price {
            Some(price) if is_positive(price) => Ok(price),
            _ => Err(ServiceError::bad_request(
                "Dish must include a price, numeral and > 0",
            )),
        }
    }

    pub fn image_url(&self) -> Result<&str, ServiceError> {
        required_text(self.image_url.as_deref(), "Dish must include an image_url")
    }

    /// The body identifier, if the client sent one.
    pub fn body_id(&self) -> Option<&Value> {
        sent_id(self.id.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub deliver_to: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub mobile_number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_lines")]
    pub dishes: Option<Vec<OrderDishPayload>>,
}

impl OrderPayload {
    pub fn deliver_to(&self) -> Result<&str, ServiceError> {
        required_text(self.deliver_to.as_deref(), "Order must include a deliverTo")
    }

    pub fn mobile_number(&self) -> Result<&str, ServiceError> {
        required_text(self.mobile_number.as_deref(), "Order must include a mobileNumber")
    }

    pub fn dishes(&self) -> Result<&[OrderDishPayload], ServiceError> {
        match self.dishes.as_deref() {
            Some(lines) if !lines.is_empty() => Ok(lines),
            _ => Err(ServiceError::bad_request(
                "Order must include at least one dish",
            )),
        }
    }

    pub fn body_id(&self) -> Option<&Value> {
        sent_id(self.id.as_ref())
    }
}

/// One requested order line. Dish fields are passed through untouched; only
/// `quantity` is checked.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderDishPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub quantity: Option<Number>,
}

impl OrderDishPayload {
    /// The quantity if it is a whole number greater than zero, in the
    /// representation the client sent (`2` and `2.0` both qualify).
    pub fn quantity(&self) -> Option<&Number> {
        self.quantity.as_ref().filter(|q| is_positive_integer(q))
    }
}
