//! Dish validation: error catalogue, field validators, and schemas.
//!
//! Validation never panics and never short-circuits on the first failure.
//! Every field is checked and every failure is collected into
//! [`ValidationErrors`], in field order (name, description, price, category,
//! status). A schema either returns fully validated data or the full error
//! set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DishField;

pub mod fields;
pub mod schema;

pub use schema::{CreationSchema, DishDraft, DishPatch, DishSchema, UpdateSchema};

/// Outcome of a schema or uniqueness check.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

// ── Error kinds ──────────────────────────────────────────────────────────────

/// Closed catalogue of validation failures.
///
/// Serialized as the stable code (`NAME_REQUIRED`, ...). Messages come from a
/// single fixed locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    NameRequired,
    NameTooLong,
    NameEmpty,
    NameExists,

    DescriptionTooLong,
    DescriptionInvalidType,

    PriceRequired,
    #[serde(rename = "PRICE_INVALID")]
    PriceInvalidType,
    PriceTooLow,
    PriceTooHigh,
    PriceTooManyDecimals,

    CategoryRequired,
    CategoryInvalid,

    StatusInvalid,
}

impl ValidationErrorKind {
    /// Field this kind is reported against.
    pub const fn field(&self) -> DishField {
        match self {
            Self::NameRequired | Self::NameTooLong | Self::NameEmpty | Self::NameExists => {
                DishField::Name
            }
            Self::DescriptionTooLong | Self::DescriptionInvalidType => DishField::Description,
            Self::PriceRequired
            | Self::PriceInvalidType
            | Self::PriceTooLow
            | Self::PriceTooHigh
            | Self::PriceTooManyDecimals => DishField::Price,
            Self::CategoryRequired | Self::CategoryInvalid => DishField::Category,
            Self::StatusInvalid => DishField::Status,
        }
    }

    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NameRequired => "NAME_REQUIRED",
            Self::NameTooLong => "NAME_TOO_LONG",
            Self::NameEmpty => "NAME_EMPTY",
            Self::NameExists => "NAME_EXISTS",
            Self::DescriptionTooLong => "DESCRIPTION_TOO_LONG",
            Self::DescriptionInvalidType => "DESCRIPTION_INVALID_TYPE",
            Self::PriceRequired => "PRICE_REQUIRED",
            Self::PriceInvalidType => "PRICE_INVALID",
            Self::PriceTooLow => "PRICE_TOO_LOW",
            Self::PriceTooHigh => "PRICE_TOO_HIGH",
            Self::PriceTooManyDecimals => "PRICE_TOO_MANY_DECIMALS",
            Self::CategoryRequired => "CATEGORY_REQUIRED",
            Self::CategoryInvalid => "CATEGORY_INVALID",
            Self::StatusInvalid => "STATUS_INVALID",
        }
    }

    /// User-facing message.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NameRequired => "El nombre es requerido",
            Self::NameTooLong => "El nombre debe tener máximo 100 caracteres",
            Self::NameEmpty => "El nombre no puede estar vacío",
            Self::NameExists => "El nombre ya existe en el menú",
            Self::DescriptionTooLong => "La descripción debe tener máximo 500 caracteres",
            Self::DescriptionInvalidType => "La descripción debe ser texto",
            Self::PriceRequired => "El precio es requerido",
            Self::PriceInvalidType => "El precio debe ser un número",
            Self::PriceTooLow => "El precio debe ser mayor a 0",
            Self::PriceTooHigh => "El precio no puede exceder 999,999.99",
            Self::PriceTooManyDecimals => "El precio debe tener máximo 2 decimales",
            Self::CategoryRequired => "La categoría es requerida",
            Self::CategoryInvalid => "Categoría no válida",
            Self::StatusInvalid => "Estado no válido",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ── FieldError ───────────────────────────────────────────────────────────────

/// A single field-keyed failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: DishField,
    pub kind: ValidationErrorKind,
}

impl FieldError {
    pub const fn new(field: DishField, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }

    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl From<ValidationErrorKind> for FieldError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self::new(kind.field(), kind)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

// ── ValidationErrors ─────────────────────────────────────────────────────────

/// Ordered collection of field failures.
///
/// Never empty when returned as the `Err` side of a [`ValidationResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: impl Into<FieldError>) {
        self.0.push(error.into());
    }

    /// Append every error from `other`, keeping order.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn contains(&self, kind: ValidationErrorKind) -> bool {
        self.0.iter().any(|e| e.kind == kind)
    }

    /// Kinds reported against one field, in order.
    pub fn for_field(&self, field: DishField) -> Vec<ValidationErrorKind> {
        self.0
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.kind)
            .collect()
    }

    pub fn kinds(&self) -> Vec<ValidationErrorKind> {
        self.0.iter().map(|e| e.kind).collect()
    }

    /// `Ok(value)` when no error was collected.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> ValidationResult<T> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_maps_to_its_field() {
        assert_eq!(ValidationErrorKind::NameExists.field(), DishField::Name);
        assert_eq!(
            ValidationErrorKind::PriceTooManyDecimals.field(),
            DishField::Price
        );
        assert_eq!(
            ValidationErrorKind::CategoryRequired.field(),
            DishField::Category
        );
        assert_eq!(ValidationErrorKind::StatusInvalid.field(), DishField::Status);
    }

    #[test]
    fn codes_match_serialized_form() {
        let kinds = [
            ValidationErrorKind::NameRequired,
            ValidationErrorKind::PriceInvalidType,
            ValidationErrorKind::PriceTooManyDecimals,
            ValidationErrorKind::DescriptionInvalidType,
        ];
        for kind in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
        }
    }

    #[test]
    fn display_joins_messages_in_order() {
        let errors = ValidationErrors::from(vec![
            FieldError::from(ValidationErrorKind::NameEmpty),
            FieldError::from(ValidationErrorKind::PriceTooLow),
        ]);
        assert_eq!(
            errors.to_string(),
            "name: El nombre no puede estar vacío; price: El precio debe ser mayor a 0"
        );
    }

    #[test]
    fn merge_appends() {
        let mut errors = ValidationErrors::from(FieldError::from(ValidationErrorKind::PriceTooLow));
        errors.merge(ValidationErrors::from(FieldError::from(
            ValidationErrorKind::NameExists,
        )));
        assert_eq!(
            errors.kinds(),
            vec![
                ValidationErrorKind::PriceTooLow,
                ValidationErrorKind::NameExists
            ]
        );
    }

    #[test]
    fn into_result_is_ok_only_when_empty() {
        assert_eq!(ValidationErrors::new().into_result(|| 7), Ok(7));

        let errors = ValidationErrors::from(FieldError::from(ValidationErrorKind::NameRequired));
        assert!(errors.into_result(|| 7).is_err());
    }
}
