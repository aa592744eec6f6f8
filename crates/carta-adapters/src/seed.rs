//! The starter menu.
//!
//! A fresh store is filled with these three dishes unless seeding is turned
//! off in the configuration.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use carta_core::{
    domain::{CreationSchema, Dish, DishId, DishSchema, DishStatus},
    error::MenuResult,
};

fn starter_menu() -> [(&'static str, DishStatus, Value); 3] {
    [
        (
            "dish-1",
            DishStatus::Available,
            json!({
                "name": "Hamburguesa Trufada",
                "description": "Carne angus y trufa",
                "price": 15.50,
                "category": "Entradas"
            }),
        ),
        (
            "dish-2",
            DishStatus::SoldOut,
            json!({
                "name": "Ensalada César",
                "description": "Lechuga romana, crutones, parmesano, aderezo",
                "price": 12.75,
                "category": "Platos Fuertes"
            }),
        ),
        (
            "dish-3",
            DishStatus::Available,
            json!({
                "name": "Tiramisú",
                "description": "Postre italiano con mascarpone y cacao",
                "price": 8.00,
                "category": "Postres"
            }),
        ),
    ]
}

/// Build the starter dishes, all stamped with `now`.
///
/// Each entry goes through the creation schema, so the seed obeys the same
/// rules as user input.
pub fn seed_dishes(now: DateTime<Utc>) -> MenuResult<Vec<Dish>> {
    starter_menu()
        .into_iter()
        .map(|(id, status, raw)| -> MenuResult<Dish> {
            let draft = CreationSchema.validate(&raw)?;
            let id = DishId::try_new(id)?;
            Ok(Dish::create(id, draft, now).with_status(status, now))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use carta_core::domain::{Category, is_name_unique};

    use super::*;

    #[test]
    fn seed_matches_starter_menu() {
        let dishes = seed_dishes(Utc::now()).unwrap();
        assert_eq!(dishes.len(), 3);

        assert_eq!(dishes[0].id().as_str(), "dish-1");
        assert_eq!(dishes[0].price().currency(), "$15.50");
        assert_eq!(dishes[1].status(), DishStatus::SoldOut);
        assert_eq!(dishes[1].category(), Category::PlatosFuertes);
        assert_eq!(dishes[2].price().formatted(), "8.00");
    }

    #[test]
    fn seed_names_are_unique() {
        let dishes = seed_dishes(Utc::now()).unwrap();
        for (i, dish) in dishes.iter().enumerate() {
            let others: Vec<_> = dishes
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, d)| d.clone())
                .collect();
            assert!(is_name_unique(dish.name().as_str(), &others, None));
        }
    }
}
