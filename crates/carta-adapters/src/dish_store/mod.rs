//! `DishStore` implementations.

mod json_file;
mod memory;

pub use json_file::JsonFileDishStore;
pub use memory::InMemoryDishStore;
