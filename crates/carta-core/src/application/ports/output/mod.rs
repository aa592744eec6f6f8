//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `carta-adapters` crate provides implementations.

use crate::domain::{Dish, DishId};
use crate::error::MenuResult;

/// Port for the dish collection.
///
/// Implemented by:
/// - `carta_adapters::dish_store::InMemoryDishStore` (tests, `--store memory`)
/// - `carta_adapters::dish_store::JsonFileDishStore` (persistent menu file)
///
/// ## Contract
///
/// - `list` returns dishes in insertion order
/// - ids are unique; `insert` with a known id fails with `DuplicateId`
/// - `replace` and `remove` fail with `DishNotFound` for an unknown id
/// - the store does not validate; callers hand it validated `Dish` values
#[cfg_attr(test, mockall::automock)]
pub trait DishStore: Send + Sync {
    /// All dishes, in insertion order.
    fn list(&self) -> MenuResult<Vec<Dish>>;

    /// Look up one dish.
    fn get(&self, id: &DishId) -> MenuResult<Option<Dish>>;

    /// Add a new dish.
    fn insert(&self, dish: Dish) -> MenuResult<()>;

    /// Overwrite the dish with the same id, keeping its position.
    fn replace(&self, dish: Dish) -> MenuResult<()>;

    /// Remove a dish and hand it back.
    fn remove(&self, id: &DishId) -> MenuResult<Dish>;

    /// Number of dishes.
    fn len(&self) -> MenuResult<usize>;

    fn is_empty(&self) -> MenuResult<bool> {
        Ok(self.len()? == 0)
    }
}
