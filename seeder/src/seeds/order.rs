use std::future::Future;
use std::pin::Pin;

use db::models::{Dish, Order, OrderDish};
use serde_json::Number;
use util::state::AppState;

use crate::seed::Seeder;
use crate::seeds::dish;

pub struct OrderSeeder;

fn line(dish: &Dish, quantity: u64) -> OrderDish {
    OrderDish {
        id: Some(dish.id.clone()),
        name: Some(dish.name.clone()),
        description: Some(dish.description.clone()),
        image_url: Some(dish.image_url.clone()),
        price: Some(dish.price.clone()),
        quantity: Number::from(quantity),
    }
}

fn fixtures() -> Vec<Order> {
    let dishes = dish::fixtures();
    let mut orders = Vec::new();

    if let [spaghetti, stir_fry, bagel, ..] = dishes.as_slice() {
        orders.push(Order {
            id: "f6069a542257054114138301947672ba".into(),
            deliver_to: "1600 Pennsylvania Avenue NW, Washington, DC 20500".into(),
            mobile_number: "(202) 456-1111".into(),
            status: "out-for-delivery".into(),
            dishes: vec![line(spaghetti, 1)],
        });
        orders.push(Order {
            id: "5a887d326e83d3c5bdcbee398ea32aff".into(),
            deliver_to: "308 Negra Arroyo Lane, Albuquerque, NM".into(),
            mobile_number: "(505) 143-3369".into(),
            status: "delivered".into(),
            dishes: vec![line(stir_fry, 2)],
        });
        orders.push(Order {
            id: "0bd6e7a4b0a24c9d8c9f2f8b6e7d1c3a".into(),
            deliver_to: "221B Baker Street, London".into(),
            mobile_number: "020 7224 3688".into(),
            status: "pending".into(),
            dishes: vec![line(bagel, 3), line(spaghetti, 1)],
        });
    }

    orders
}

impl Seeder for OrderSeeder {
    fn seed<'a>(&'a self, state: &'a AppState) -> Pin<Box<dyn Future<Output = usize> + Send + 'a>> {
        Box::pin(async move {
            let mut added = 0;
            for order in fixtures() {
                if state.orders().insert(order).await {
                    added += 1;
                }
            }
            added
        })
    }
}
