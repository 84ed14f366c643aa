use std::future::Future;
use std::pin::Pin;

use db::models::Dish;
use serde_json::Number;
use util::state::AppState;

use crate::seed::Seeder;

pub struct DishSeeder;

pub(crate) fn fixtures() -> Vec<Dish> {
    [
        (
            "d351db2b49b69679504652ea1cf38241",
            "Dolcelatte and chickpea spaghetti",
            "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
            19,
            "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg?h=530&w=350",
        ),
        (
            "3c637d011d844ebab1205fef8a7e36ea",
            "Broccoli and beetroot stir fry",
            "Crunchy stir fry featuring fresh broccoli and beetroot",
            15,
            "https://images.pexels.com/photos/4144234/pexels-photo-4144234.jpeg?h=530&w=350",
        ),
        (
            "90c3d873684bf381dfab29034b5bba73",
            "Falafel and tahini bagel",
            "A warm bagel filled with falafel and tahini",
            6,
            "https://images.pexels.com/photos/4560606/pexels-photo-4560606.jpeg?h=530&w=350",
        ),
        (
            "4e86a9b1d8fb4c3fa8b1f35a2d8f0a6e",
            "Lemon and marjoram risotto",
            "Slow cooked arborio rice finished with lemon zest and marjoram",
            17,
            "https://images.pexels.com/photos/6287520/pexels-photo-6287520.jpeg?h=530&w=350",
        ),
    ]
    .into_iter()
    .map(|(id, name, description, price, image_url)| Dish {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price: Number::from(price as u64),
        image_url: image_url.into(),
    })
    .collect()
}

impl Seeder for DishSeeder {
    fn seed<'a>(&'a self, state: &'a AppState) -> Pin<Box<dyn Future<Output = usize> + Send + 'a>> {
        Box::pin(async move {
            let mut added = 0;
            for dish in fixtures() {
                if state.dishes().insert(dish).await {
                    added += 1;
                }
            }
            added
        })
    }
}
