//! Infrastructure adapters for Carta.
//!
//! This crate implements the ports defined in `carta-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod dish_store;
pub mod seed;

// Re-export commonly used adapters
pub use dish_store::{InMemoryDishStore, JsonFileDishStore};
pub use seed::seed_dishes;
