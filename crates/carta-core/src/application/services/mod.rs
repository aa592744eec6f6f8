//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a dish" or "toggle availability".

pub mod menu_service;

pub use menu_service::{DishFilter, MenuService};
