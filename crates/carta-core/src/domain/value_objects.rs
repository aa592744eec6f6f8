//! Domain value objects: Category, DishStatus, DishField.
//!
//! # Design
//!
//! These are closed sets, `Copy`, equality-by-value, no identity. Adding a
//! category is a compile-time-visible change: every `match` on [`Category`]
//! must be updated.
//!
//! Two string forms exist for each type:
//!
//! - the canonical label (`"Platos Fuertes"`, `"SoldOut"`) accepted by the
//!   validation schemas, matched exactly
//! - a lenient `FromStr` used by the CLI, which also accepts slugs and is
//!   case-insensitive

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Category ─────────────────────────────────────────────────────────────────

/// Menu section a dish belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Entradas")]
    Entradas,
    #[serde(rename = "Platos Fuertes")]
    PlatosFuertes,
    #[serde(rename = "Postres")]
    Postres,
    #[serde(rename = "Bebidas")]
    Bebidas,
    #[serde(rename = "Acompañamientos")]
    Acompanamientos,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 5] = [
        Self::Entradas,
        Self::PlatosFuertes,
        Self::Postres,
        Self::Bebidas,
        Self::Acompanamientos,
    ];

    /// Canonical display label. This is the only form the schemas accept.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Entradas => "Entradas",
            Self::PlatosFuertes => "Platos Fuertes",
            Self::Postres => "Postres",
            Self::Bebidas => "Bebidas",
            Self::Acompanamientos => "Acompañamientos",
        }
    }

    /// URL-safe slug.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Entradas => "entradas",
            Self::PlatosFuertes => "platos-fuertes",
            Self::Postres => "postres",
            Self::Bebidas => "bebidas",
            Self::Acompanamientos => "acompanamientos",
        }
    }

    /// Stable catalogue identifier.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Entradas => "cat-1",
            Self::PlatosFuertes => "cat-2",
            Self::Postres => "cat-3",
            Self::Bebidas => "cat-4",
            Self::Acompanamientos => "cat-5",
        }
    }

    /// Exact label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == needle || c.slug() == needle || c.id() == needle)
            .ok_or_else(|| DomainError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

// ── DishStatus ───────────────────────────────────────────────────────────────

/// Availability of a dish.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DishStatus {
    #[default]
    Available,
    SoldOut,
}

impl DishStatus {
    pub const ALL: [DishStatus; 2] = [Self::Available, Self::SoldOut];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::SoldOut => "SoldOut",
        }
    }

    /// Label shown to staff.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Available => "Disponible",
            Self::SoldOut => "Agotado",
        }
    }

    /// The other status.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Available => Self::SoldOut,
            Self::SoldOut => Self::Available,
        }
    }

    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Exact lookup on the canonical form.
    pub fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for DishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DishStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" | "disponible" => Ok(Self::Available),
            "soldout" | "sold-out" | "sold_out" | "agotado" => Ok(Self::SoldOut),
            _ => Err(DomainError::UnknownStatus {
                value: s.to_string(),
            }),
        }
    }
}

// ── DishField ────────────────────────────────────────────────────────────────

/// Input keys understood by the schemas. Used to key validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishField {
    Name,
    Description,
    Price,
    Category,
    Status,
}

impl DishField {
    /// Raw input key.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Price => "price",
            Self::Category => "category",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for DishField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
