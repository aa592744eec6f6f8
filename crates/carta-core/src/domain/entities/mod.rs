pub mod common;
pub mod dish;

pub use common::{Description, DishId, DishName};
pub use dish::{Dish, DishSummary};
