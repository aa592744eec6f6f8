//! Whole-record schemas built from the field validators.
//!
//! - [`CreationSchema`]: name, price, and category required; description
//!   optional; status ignored (new dishes are always `Available`).
//! - [`UpdateSchema`]: every field optional, status included. Absent keys
//!   leave the target untouched.
//!
//! Unknown keys are ignored. A non-object input is read as an empty record.
//! Name uniqueness is not checked here; see `domain::uniqueness`.

use serde_json::Value;

use crate::domain::{
    entities::common::{Description, DishName},
    price::Price,
    validation::{
        FieldError, ValidationErrors, ValidationResult,
        fields::{
            FieldOutcome, Presence, validate_category, validate_description, validate_name,
            validate_price, validate_status,
        },
    },
    value_objects::{Category, DishField, DishStatus},
};

/// A named set of field rules.
pub trait DishSchema {
    type Output;

    /// Validate a raw record, collecting every field failure.
    fn validate(&self, raw: &Value) -> ValidationResult<Self::Output>;
}

/// Validated values for a new dish, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishDraft {
    pub name: DishName,
    pub description: Option<Description>,
    pub price: Price,
    pub category: Category,
}

/// Validated partial update.
///
/// `None` leaves a field unchanged. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishPatch {
    pub name: Option<DishName>,
    pub description: Option<Option<Description>>,
    pub price: Option<Price>,
    pub category: Option<Category>,
    pub status: Option<DishStatus>,
}

impl DishPatch {
    /// Patch that only sets the status.
    pub fn status_only(status: DishStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.status.is_none()
    }
}

/// Schema for creating a dish.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreationSchema;

impl DishSchema for CreationSchema {
    type Output = DishDraft;

    fn validate(&self, raw: &Value) -> ValidationResult<DishDraft> {
        let mut errors = ValidationErrors::new();

        let name = collect(
            &mut errors,
            DishField::Name,
            validate_name(raw.get("name"), Presence::Required),
        );
        let description = collect(
            &mut errors,
            DishField::Description,
            validate_description(raw.get("description")),
        );
        let price = collect(
            &mut errors,
            DishField::Price,
            validate_price(raw.get("price"), Presence::Required),
        );
        let category = collect(
            &mut errors,
            DishField::Category,
            validate_category(raw.get("category"), Presence::Required),
        );

        match (name, price, category) {
            (Some(name), Some(price), Some(category)) if errors.is_empty() => Ok(DishDraft {
                name,
                description: description.flatten(),
                price,
                category,
            }),
            _ => Err(errors),
        }
    }
}

/// Schema for updating a dish.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateSchema;

impl DishSchema for UpdateSchema {
    type Output = DishPatch;

    fn validate(&self, raw: &Value) -> ValidationResult<DishPatch> {
        let mut errors = ValidationErrors::new();

        let patch = DishPatch {
            name: collect(
                &mut errors,
                DishField::Name,
                validate_name(raw.get("name"), Presence::Optional),
            ),
            description: collect(
                &mut errors,
                DishField::Description,
                validate_description(raw.get("description")),
            ),
            price: collect(
                &mut errors,
                DishField::Price,
                validate_price(raw.get("price"), Presence::Optional),
            ),
            category: collect(
                &mut errors,
                DishField::Category,
                validate_category(raw.get("category"), Presence::Optional),
            ),
            status: collect(
                &mut errors,
                DishField::Status,
                validate_status(raw.get("status")),
            ),
        };

        errors.into_result(|| patch)
    }
}

/// Record a field's failures and hand back its value, if any.
fn collect<T>(errors: &mut ValidationErrors, field: DishField, outcome: FieldOutcome<T>) -> Option<T> {
    match outcome {
        Ok(value) => value,
        Err(kinds) => {
            for kind in kinds {
                errors.push(FieldError::new(field, kind));
            }
            None
        }
    }
}
