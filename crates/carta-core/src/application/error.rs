//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No dish has the given id.
    #[error("Dish not found: {id}")]
    DishNotFound { id: String },

    /// A dish with this id is already stored.
    #[error("Dish id already in use: {id}")]
    DuplicateId { id: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Dish store error")]
    StoreLockError,

    /// Reading or writing the menu file failed.
    #[error("Storage error at {path}: {reason}")]
    Storage { path: PathBuf, reason: String },

    /// The menu file exists but cannot be understood.
    #[error("Corrupt menu file {path}: {reason}")]
    CorruptStore { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DishNotFound { id } => vec![
                format!("No dish with id '{}'", id),
                "Try: carta list to see dish ids".into(),
            ],
            Self::DuplicateId { .. } => vec!["Retry the command to get a fresh id".into()],
            Self::StoreLockError => vec![
                "The dish store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::Storage { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CorruptStore { path, .. } => vec![
                format!("Inspect or move aside: {}", path.display()),
                "A missing menu file is recreated from the seed menu".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DishNotFound { .. } => ErrorCategory::NotFound,
            Self::DuplicateId { .. } => ErrorCategory::Conflict,
            Self::StoreLockError | Self::Storage { .. } | Self::CorruptStore { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
