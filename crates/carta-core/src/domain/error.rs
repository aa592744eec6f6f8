// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::validation::{ValidationErrorKind, ValidationErrors};

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (validation results are merged and re-reported)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// One or more dish fields failed validation. Carries every failure, in
    /// field order, so callers can display them together.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Unknown category: '{value}'")]
    UnknownCategory { value: String },

    #[error("Unknown status: '{value}'")]
    UnknownStatus { value: String },

    #[error("Invalid dish id: '{value}'")]
    InvalidDishId { value: String },

    // ========================================================================
    // Integrity Errors
    // ========================================================================
    #[error("Stored dish '{id}' is inconsistent: {reason}")]
    InconsistentRecord { id: String, reason: String },
}

impl DomainError {
    /// Whether the error set contains the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        match self {
            Self::Validation(errors) => errors.contains(kind),
            _ => false,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => {
                let mut out: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message()))
                    .collect();
                if errors.contains(ValidationErrorKind::NameExists) {
                    out.push("Choose a different name or edit the existing dish".into());
                }
                out
            }
            Self::UnknownCategory { .. } => vec![
                "Valid categories:".into(),
                "  • Entradas".into(),
                "  • Platos Fuertes".into(),
                "  • Postres".into(),
                "  • Bebidas".into(),
                "  • Acompañamientos".into(),
                "Try: carta categories".into(),
            ],
            Self::UnknownStatus { .. } => vec![
                "Valid statuses: Available, SoldOut".into(),
            ],
            Self::InvalidDishId { .. } => vec![
                "Dish ids are shown by: carta list".into(),
            ],
            Self::InconsistentRecord { .. } => vec![
                "The menu file was edited by hand or is corrupted".into(),
                "Check: carta config get store.path".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(errors) if errors.contains(ValidationErrorKind::NameExists) => {
                ErrorCategory::Conflict
            }
            Self::Validation(_)
            | Self::UnknownCategory { .. }
            | Self::UnknownStatus { .. }
            | Self::InvalidDishId { .. } => ErrorCategory::Validation,
            Self::InconsistentRecord { .. } => ErrorCategory::Internal,
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::FieldError;
    use crate::domain::value_objects::DishField;

    #[test]
    fn name_exists_is_a_conflict() {
        let err = DomainError::Validation(ValidationErrors::from(vec![FieldError::new(
            DishField::Name,
            ValidationErrorKind::NameExists,
        )]));
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.has_kind(ValidationErrorKind::NameExists));
    }

    #[test]
    fn field_failures_are_validation() {
        let err = DomainError::Validation(ValidationErrors::from(vec![FieldError::new(
            DishField::Price,
            ValidationErrorKind::PriceTooLow,
        )]));
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.has_kind(ValidationErrorKind::NameExists));
    }

    #[test]
    fn validation_suggestions_list_every_message() {
        let err = DomainError::Validation(ValidationErrors::from(vec![
            FieldError::new(DishField::Name, ValidationErrorKind::NameRequired),
            FieldError::new(DishField::Category, ValidationErrorKind::CategoryInvalid),
        ]));
        let suggestions = err.suggestions();
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].contains("El nombre es requerido"));
        assert!(suggestions[1].contains("Categoría no válida"));
    }

    #[test]
    fn unknown_category_suggests_catalogue() {
        let err = DomainError::UnknownCategory {
            value: "sopas".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("Postres")));
    }
}
