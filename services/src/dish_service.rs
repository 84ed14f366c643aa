use db::models::Dish;
use db::Store;
use serde_json::Number;

use crate::error::ServiceError;
use crate::payload::{display_id, id_matches, DishPayload};
use crate::validation::{Chain, Step};

/// What the dish validators look at: the request payload and, for updates, the
/// identifier taken from the route.
#[derive(Debug, Clone, Default)]
pub struct DishCandidate {
    pub payload: DishPayload,
    pub route_id: Option<String>,
}

fn has_name(c: &DishCandidate) -> Result<(), ServiceError> {
    c.payload.name().map(|_| ())
}

fn has_description(c: &DishCandidate) -> Result<(), ServiceError> {
    c.payload.description().map(|_| ())
}

fn has_price(c: &DishCandidate) -> Result<(), ServiceError> {
    c.payload.price().map(|_| ())
}

fn has_image_url(c: &DishCandidate) -> Result<(), ServiceError> {
    c.payload.image_url().map(|_| ())
}

fn ids_match(c: &DishCandidate) -> Result<(), ServiceError> {
    match (c.payload.body_id(), c.route_id.as_deref()) {
        (Some(body), Some(route)) if !id_matches(body, route) => {
            Err(ServiceError::bad_request(format!(
                "Dish id does not match route id. Dish: {}, Route: {route}",
                display_id(body)
            )))
        }
        _ => Ok(()),
    }
}

const CREATE_STEPS: &[Step<DishCandidate>] = &[
    ("has_name", has_name),
    ("has_description", has_description),
    ("has_price", has_price),
    ("has_image_url", has_image_url),
];

const UPDATE_STEPS: &[Step<DishCandidate>] = &[
    ("has_name", has_name),
    ("has_description", has_description),
    ("has_price", has_price),
    ("has_image_url", has_image_url),
    ("ids_match", ids_match),
];

pub const CREATE_CHAIN: Chain<DishCandidate> = Chain::new("dish create", CREATE_STEPS);
pub const UPDATE_CHAIN: Chain<DishCandidate> = Chain::new("dish update", UPDATE_STEPS);

/// The writable fields of a dish, pulled out of a payload that passed validation.
struct DishFields {
    name: String,
    description: String,
    price: Number,
    image_url: String,
}

impl TryFrom<&DishPayload> for DishFields {
    type Error = ServiceError;

    fn try_from(payload: &DishPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            name: payload.name()?.to_owned(),
            description: payload.description()?.to_owned(),
            price: payload.price()?.clone(),
            image_url: payload.image_url()?.to_owned(),
        })
    }
}

impl DishFields {
    fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }

    fn apply_to(self, dish: &mut Dish) {
        dish.name = self.name;
        dish.description = self.description;
        dish.price = self.price;
        dish.image_url = self.image_url;
    }
}

pub struct DishService;

impl DishService {
    pub async fn list(store: &Store<Dish>) -> Vec<Dish> {
        store.all().await
    }

    /// Resolves a dish by identifier.
    pub async fn find(store: &Store<Dish>, dish_id: &str) -> Result<Dish, ServiceError> {
        store
            .find(dish_id)
            .await
            .ok_or_else(|| ServiceError::not_found(format!("Dish does not exist: {dish_id}.")))
    }

    /// Validates `payload` and appends a new dish with a generated identifier.
    ///
    /// Any identifier in the payload is ignored.
    pub async fn create(store: &Store<Dish>, payload: DishPayload) -> Result<Dish, ServiceError> {
        let candidate = DishCandidate {
            payload,
            route_id: None,
        };
        CREATE_CHAIN.run(&candidate)?;
        let fields = DishFields::try_from(&candidate.payload)?;

        let dish = store.insert_with(|id| fields.into_dish(id)).await;
        log::info!("Created dish {}", dish.id);
        Ok(dish)
    }

    /// Validates `payload` against the dish at `dish_id` and overwrites its
    /// fields in place. The identifier is never changed.
    pub async fn update(
        store: &Store<Dish>,
        dish_id: &str,
        payload: DishPayload,
    ) -> Result<Dish, ServiceError> {
        let candidate = DishCandidate {
            payload,
            route_id: Some(dish_id.to_owned()),
        };
        UPDATE_CHAIN.run(&candidate)?;
        let fields = DishFields::try_from(&candidate.payload)?;

        let dish = store
            .update(dish_id, |dish| fields.apply_to(dish))
            .await
            .ok_or_else(|| ServiceError::not_found(format!("Dish does not exist: {dish_id}.")))?;
        log::info!("Updated dish {}", dish.id);
        Ok(dish)
    }
}
