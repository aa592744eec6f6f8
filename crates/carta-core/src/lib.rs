//! Carta Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Carta, a
//! restaurant menu manager, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            carta-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (MenuService)               │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │            (Driven: DishStore)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     carta-adapters (Infrastructure)     │
//! │ (InMemoryDishStore, JsonFileDishStore)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Schemas, Price, Uniqueness, Dish)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use carta_core::prelude::*;
//! use serde_json::json;
//!
//! # fn run(store: Box<dyn DishStore>) -> MenuResult<()> {
//! let service = MenuService::new(store);
//!
//! let dish = service.create_dish(&json!({
//!     "name": "Tacos",
//!     "price": 9.99,
//!     "category": "Entradas",
//! }))?;
//!
//! assert_eq!(dish.price().currency(), "$9.99");
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{DishFilter, MenuService, ports::DishStore};
    pub use crate::domain::{
        Category, CreationSchema, Description, Dish, DishDraft, DishField, DishId, DishName,
        DishPatch, DishSchema, DishStatus, DishSummary, FieldError, Price, UpdateSchema,
        ValidationErrorKind, ValidationErrors, ValidationResult, format_currency, format_price,
        is_name_unique,
    };
    pub use crate::error::{MenuError, MenuResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
