use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    error::DomainError,
    form::{DESCRIPTION_MAX_LEN, NAME_MAX_LEN},
    validation::ValidationErrorKind,
};

/// Opaque dish identifier.
///
/// Invariant: never empty or all-whitespace. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DishId(String);

impl DishId {
    /// Fallible constructor.
    pub fn try_new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            Err(DomainError::InvalidDishId { value: id })
        } else {
            Ok(Self(id))
        }
    }

    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DishId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for DishId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<DishId> for String {
    fn from(id: DishId) -> Self {
        id.0
    }
}

/// A trimmed dish name of 1 to 100 characters.
///
/// Display casing is kept; comparisons go through [`DishName::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DishName(String);

impl DishName {
    /// Trim and check length.
    ///
    /// An empty raw string is "required"; a string that only becomes empty
    /// after trimming is "empty".
    pub fn parse(raw: &str) -> Result<Self, ValidationErrorKind> {
        if raw.is_empty() {
            return Err(ValidationErrorKind::NameRequired);
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationErrorKind::NameEmpty);
        }
        if trimmed.chars().count() > NAME_MAX_LEN {
            return Err(ValidationErrorKind::NameTooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Comparison key: trimmed, lowercased.
    pub fn normalized(&self) -> String {
        normalize_name(&self.0)
    }
}

impl fmt::Display for DishName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DishName {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).map_err(|kind| kind.message())
    }
}

impl From<DishName> for String {
    fn from(name: DishName) -> Self {
        name.0
    }
}

/// A trimmed, non-empty description of at most 500 characters.
///
/// An empty description is represented by `Option::None`, never by an empty
/// `Description`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Trim and check length. Blank input yields `Ok(None)`.
    pub fn parse(raw: &str) -> Result<Option<Self>, ValidationErrorKind> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(ValidationErrorKind::DescriptionTooLong);
        }
        Ok(Some(Self(trimmed.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Description {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match Self::parse(&value) {
            Ok(Some(description)) => Ok(description),
            Ok(None) => Err("description cannot be blank"),
            Err(kind) => Err(kind.message()),
        }
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

/// Trim and lowercase a name for comparison.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
