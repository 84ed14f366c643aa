use db::models::order::{KNOWN_STATUSES, STATUS_INVALID, STATUS_PENDING};
use db::models::{Order, OrderDish};
use db::Store;

use crate::error::ServiceError;
use crate::payload::{display_id, id_matches, OrderDishPayload, OrderPayload};
use crate::validation::{Chain, Step};

#[derive(Debug, Clone, Default)]
pub struct OrderCandidate {
    pub payload: OrderPayload,
    pub route_id: Option<String>,
}

fn has_deliver_to(c: &OrderCandidate) -> Result<(), ServiceError> {
    c.payload.deliver_to().map(|_| ())
}

fn has_mobile_number(c: &OrderCandidate) -> Result<(), ServiceError> {
    c.payload.mobile_number().map(|_| ())
}

fn has_dishes(c: &OrderCandidate) -> Result<(), ServiceError> {
    c.payload.dishes().map(|_| ())
}

fn has_valid_status(c: &OrderCandidate) -> Result<(), ServiceError> {
    match c.payload.status.as_deref() {
        Some(status) if !status.is_empty() && status != STATUS_INVALID => Ok(()),
        _ => Err(ServiceError::bad_request(format!(
            "Order must have a status of {}",
            KNOWN_STATUSES.join(", ")
        ))),
    }
}

/// Checks every line's quantity and reports all offending indexes at once.
fn has_valid_quantities(c: &OrderCandidate) -> Result<(), ServiceError> {
    let invalid = invalid_quantity_indexes(c.payload.dishes()?);
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(quantity_error(&invalid))
    }
}

fn ids_match(c: &OrderCandidate) -> Result<(), ServiceError> {
    match (c.payload.body_id(), c.route_id.as_deref()) {
        (Some(body), Some(route)) if !id_matches(body, route) => {
            Err(ServiceError::bad_request(format!(
                "Order id does not match route id. Order: {}, Route: {route}",
                display_id(body)
            )))
        }
        _ => Ok(()),
    }
}

fn is_pending(order: &Order) -> Result<(), ServiceError> {
    if order.is_pending() {
        Ok(())
    } else {
        Err(ServiceError::bad_request(
            "An order cannot be deleted unless it is pending",
        ))
    }
}

fn invalid_quantity_indexes(lines: &[OrderDishPayload]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.quantity().is_none())
        .map(|(index, _)| index)
        .collect()
}

fn quantity_error(indexes: &[usize]) -> ServiceError {
    let joined = indexes
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let noun = if indexes.len() > 1 { "Dishes" } else { "Dish" };
    ServiceError::bad_request(format!(
        "{noun} {joined} must have a quantity that is an integer greater than 0"
    ))
}

const CREATE_STEPS: &[Step<OrderCandidate>] = &[
    ("has_deliver_to", has_deliver_to),
    ("has_mobile_number", has_mobile_number),
    ("has_dishes", has_dishes),
    ("has_valid_quantities", has_valid_quantities),
];

const UPDATE_STEPS: &[Step<OrderCandidate>] = &[
    ("has_deliver_to", has_deliver_to),
    ("has_mobile_number", has_mobile_number),
    ("has_dishes", has_dishes),
    ("has_valid_status", has_valid_status),
    ("has_valid_quantities", has_valid_quantities),
    ("ids_match", ids_match),
];

const DELETE_STEPS: &[Step<Order>] = &[("is_pending", is_pending)];

pub const CREATE_CHAIN: Chain<OrderCandidate> = Chain::new("order create", CREATE_STEPS);
pub const UPDATE_CHAIN: Chain<OrderCandidate> = Chain::new("order update", UPDATE_STEPS);
pub const DELETE_CHAIN: Chain<Order> = Chain::new("order delete", DELETE_STEPS);

struct OrderFields {
    deliver_to: String,
    mobile_number: String,
    status: Option<String>,
    dishes: Vec<OrderDish>,
}

impl TryFrom<&OrderPayload> for OrderFields {
    type Error = ServiceError;

    fn try_from(payload: &OrderPayload) -> Result<Self, Self::Error> {
        let lines = payload.dishes()?;
        let invalid = invalid_quantity_indexes(lines);
        if !invalid.is_empty() {
            return Err(quantity_error(&invalid));
        }

        let dishes = lines
            .iter()
            .filter_map(|line| {
                line.quantity().map(|quantity| OrderDish {
                    id: line.id.clone(),
                    name: line.name.clone(),
                    description: line.description.clone(),
                    image_url: line.image_url.clone(),
                    price: line.price.clone(),
                    quantity: quantity.clone(),
                })
            })
            .collect();

        Ok(Self {
            deliver_to: payload.deliver_to()?.to_owned(),
            mobile_number: payload.mobile_number()?.to_owned(),
            status: payload.status.clone().filter(|s| !s.is_empty()),
            dishes,
        })
    }
}

impl OrderFields {
    fn into_order(self, id: String) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status: self.status.unwrap_or_else(|| STATUS_PENDING.to_owned()),
            dishes: self.dishes,
        }
    }

    fn apply_to(self, order: &mut Order) {
        order.deliver_to = self.deliver_to;
        order.mobile_number = self.mobile_number;
        if let Some(status) = self.status {
            order.status = status;
        }
        order.dishes = self.dishes;
    }
}

fn not_found(order_id: &str) -> ServiceError {
    ServiceError::not_found(format!("Order does not exist: {order_id}."))
}

pub struct OrderService;

impl OrderService {
    /// Lists orders in store order, optionally only those containing `dish_id`.
    pub async fn list(store: &Store<Order>, dish_id: Option<&str>) -> Vec<Order> {
        match dish_id {
            Some(dish_id) => store.filter(|order| order.contains_dish(dish_id)).await,
            None => store.all().await,
        }
    }

    pub async fn find(store: &Store<Order>, order_id: &str) -> Result<Order, ServiceError> {
        store.find(order_id).await.ok_or_else(|| not_found(order_id))
    }

    /// Validates `payload` and appends a new order. A missing status starts the
    /// order as `pending`.
    pub async fn create(store: &Store<Order>, payload: OrderPayload) -> Result<Order, ServiceError> {
        let candidate = OrderCandidate {
            payload,
            route_id: None,
        };
        CREATE_CHAIN.run(&candidate)?;
        let fields = OrderFields::try_from(&candidate.payload)?;

        let order = store.insert_with(|id| fields.into_order(id)).await;
        log::info!("Created order {} with {} dish(es)", order.id, order.dishes.len());
        Ok(order)
    }

    pub async fn update(
        store: &Store<Order>,
        order_id: &str,
        payload: OrderPayload,
    ) -> Result<Order, ServiceError> {
        let candidate = OrderCandidate {
            payload,
            route_id: Some(order_id.to_owned()),
        };
        UPDATE_CHAIN.run(&candidate)?;
        let fields = OrderFields::try_from(&candidate.payload)?;

        let order = store
            .update(order_id, |order| fields.apply_to(order))
            .await
            .ok_or_else(|| not_found(order_id))?;
        log::info!("Updated order {} (status {})", order.id, order.status);
        Ok(order)
    }

    /// Removes a pending order. The pending check and the removal happen under
    /// one store lock.
    pub async fn delete(store: &Store<Order>, order_id: &str) -> Result<Order, ServiceError> {
        let removed = store
            .remove_where(order_id, |order| DELETE_CHAIN.run(order))
            .await?
            .ok_or_else(|| not_found(order_id))?;
        log::info!("Deleted order {}", removed.id);
        Ok(removed)
    }
}
