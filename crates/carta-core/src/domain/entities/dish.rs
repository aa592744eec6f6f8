//! The `Dish` entity.
//!
//! A `Dish` is only ever built from values that already passed a schema, so
//! field-level rules hold by construction. Mutations return a new `Dish`;
//! the original is never modified in place.
//!
//! Timestamps are supplied by the caller. The domain never reads the clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::common::{Description, DishId, DishName},
    error::DomainError,
    price::Price,
    uniqueness::NamedRecord,
    validation::{DishDraft, DishPatch},
    value_objects::{Category, DishStatus},
};

/// One menu item.
///
/// Invariant: `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    id: DishId,
    name: DishName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<Description>,
    price: Price,
    category: Category,
    status: DishStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Dish {
    /// New dish from a validated draft. Status starts as `Available`.
    pub fn create(id: DishId, draft: DishDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            status: DishStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &DishId {
        &self.id
    }
    pub fn name(&self) -> &DishName {
        &self.name
    }
    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }
    pub const fn price(&self) -> Price {
        self.price
    }
    pub const fn category(&self) -> Category {
        self.category
    }
    pub const fn status(&self) -> DishStatus {
        self.status
    }
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply only the fields present in `patch`.
    ///
    /// An empty patch is not a mutation: the copy keeps its `updated_at`.
    pub fn apply(&self, patch: &DishPatch, now: DateTime<Utc>) -> Self {
        if patch.is_empty() {
            return self.clone();
        }

        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            description: match &patch.description {
                Some(replacement) => replacement.clone(),
                None => self.description.clone(),
            },
            price: patch.price.unwrap_or(self.price),
            category: patch.category.unwrap_or(self.category),
            status: patch.status.unwrap_or(self.status),
            created_at: self.created_at,
            updated_at: self.touch(now),
        }
    }

    /// Copy with the given status.
    pub fn with_status(&self, status: DishStatus, now: DateTime<Utc>) -> Self {
        self.apply(&DishPatch::status_only(status), now)
    }

    /// Copy with the status flipped.
    pub fn toggled(&self, now: DateTime<Utc>) -> Self {
        self.with_status(self.status.toggled(), now)
    }

    /// Snapshot entry used by uniqueness checks.
    pub fn summary(&self) -> DishSummary {
        DishSummary {
            id: self.id.clone(),
            name: self.name.as_str().to_string(),
        }
    }

    /// Re-check invariants the type system cannot express.
    ///
    /// Used after deserialization.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.updated_at < self.created_at {
            return Err(DomainError::InconsistentRecord {
                id: self.id.to_string(),
                reason: "updatedAt is earlier than createdAt".into(),
            });
        }
        Ok(())
    }

    // Never move `updated_at` behind `created_at`, even with a skewed clock.
    fn touch(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.max(self.created_at)
    }
}

impl NamedRecord for Dish {
    fn record_id(&self) -> &DishId {
        &self.id
    }

    fn record_name(&self) -> &str {
        self.name.as_str()
    }
}

/// The `{id, name}` pair a uniqueness check needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishSummary {
    pub id: DishId,
    pub name: String,
}

impl NamedRecord for DishSummary {
    fn record_id(&self) -> &DishId {
        &self.id
    }

    fn record_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    use super::*;
    use crate::domain::validation::{CreationSchema, UpdateSchema, schema::DishSchema};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 29, 12, 0, 0).unwrap()
    }

    fn tacos() -> Dish {
        let draft = CreationSchema
            .validate(&json!({
                "name": "Tacos",
                "description": "Al pastor",
                "price": 9.99,
                "category": "Entradas"
            }))
            .unwrap();
        Dish::create(DishId::try_new("dish-1").unwrap(), draft, t0())
    }

    #[test]
    fn created_dish_is_available() {
        let dish = tacos();
        assert_eq!(dish.status(), DishStatus::Available);
        assert_eq!(dish.created_at(), dish.updated_at());
    }

    #[test]
    fn summary_matches_the_dish_as_a_named_record() {
        let dish = tacos();
        let summary = dish.summary();
        assert_eq!(summary.record_id(), dish.record_id());
        assert_eq!(summary.record_name(), "Tacos");
    }

    #[test]
    fn status_only_patch_changes_status_and_timestamp() {
        let dish = tacos();
        let later = t0() + Duration::minutes(5);
        let patch = UpdateSchema.validate(&json!({"status": "SoldOut"})).unwrap();

        let updated = dish.apply(&patch, later);

        assert_eq!(updated.status(), DishStatus::SoldOut);
        assert_eq!(updated.updated_at(), later);
        assert_eq!(updated.id(), dish.id());
        assert_eq!(updated.name(), dish.name());
        assert_eq!(updated.description(), dish.description());
        assert_eq!(updated.price(), dish.price());
        assert_eq!(updated.category(), dish.category());
        assert_eq!(updated.created_at(), dish.created_at());
        // the original is untouched
        assert_eq!(dish.status(), DishStatus::Available);
    }

    #[test]
    fn patch_can_clear_description() {
        let dish = tacos();
        let patch = UpdateSchema.validate(&json!({"description": ""})).unwrap();
        assert!(dish.apply(&patch, t0()).description().is_none());
    }

    #[test]
    fn empty_patch_is_not_a_mutation() {
        let dish = tacos();
        let same = dish.apply(&DishPatch::default(), t0() + Duration::hours(1));
        assert_eq!(same, dish);
    }

    #[test]
    fn updated_at_never_precedes_created_at() {
        let dish = tacos();
        let skewed = t0() - Duration::days(1);
        let toggled = dish.toggled(skewed);
        assert_eq!(toggled.updated_at(), dish.created_at());
        assert!(toggled.validate().is_ok());
    }

    #[test]
    fn toggle_round_trips() {
        let dish = tacos();
        let twice = dish.toggled(t0()).toggled(t0());
        assert_eq!(twice.status(), DishStatus::Available);
    }

    #[test]
    fn serialized_shape_uses_camel_case() {
        let value = serde_json::to_value(tacos()).unwrap();
        assert_eq!(value["id"], "dish-1");
        assert_eq!(value["price"], "9.99");
        assert_eq!(value["category"], "Entradas");
        assert_eq!(value["status"], "Available");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
    }

    #[test]
    fn deserialized_record_is_revalidated() {
        let mut value = serde_json::to_value(tacos()).unwrap();
        value["updatedAt"] = json!("2020-01-01T00:00:00Z");
        let dish: Dish = serde_json::from_value(value).unwrap();
        assert!(matches!(
            dish.validate(),
            Err(DomainError::InconsistentRecord { .. })
        ));
    }
}
