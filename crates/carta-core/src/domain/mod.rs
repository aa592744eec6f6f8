// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Carta.
//!
//! Dish validation, price handling, and name uniqueness. Everything here is
//! pure: no I/O, no clock, no logging. Storage and orchestration live in the
//! application layer behind ports.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **No clock**: Timestamps are passed in by the caller
//! - **Immutable entities**: Updates produce a new [`Dish`]
//! - **Collect, don't fail fast**: Schemas report every field failure at once
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod form;
pub mod price;
pub mod uniqueness;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{Description, Dish, DishId, DishName, DishSummary};

pub use error::{DomainError, ErrorCategory};

pub use form::{FORM_FIELDS, FormField, InputKind, form_field};

pub use price::{MAX_PRICE, MIN_PRICE, Price, format_currency, format_price};

pub use uniqueness::{NamedRecord, ensure_name_unique, is_name_unique};

pub use validation::{
    CreationSchema, DishDraft, DishPatch, DishSchema, FieldError, UpdateSchema,
    ValidationErrorKind, ValidationErrors, ValidationResult,
};

pub use value_objects::{Category, DishField, DishStatus};
