//! Menu Service - dish lifecycle orchestrator.
//!
//! Every mutation runs the same steps under one commit lock:
//! 1. Read the current snapshot from the store
//! 2. Validate the raw input with a schema and check name uniqueness
//! 3. Build the new `Dish` value and commit it
//!
//! The lock makes the uniqueness check and the commit atomic with respect to
//! other mutations through the same service.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::DishStore},
    domain::{
        Category, CreationSchema, Dish, DishDraft, DishId, DishPatch, DishSchema, DishStatus,
        DishSummary, UpdateSchema, ValidationErrors, ValidationResult, ensure_name_unique, is_name_unique,
        validation::fields::{Presence, validate_name},
    },
    error::MenuResult,
};

/// Optional filters for [`MenuService::list_dishes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DishFilter {
    pub category: Option<Category>,
    pub status: Option<DishStatus>,
}

impl DishFilter {
    pub fn matches(&self, dish: &Dish) -> bool {
        self.category.is_none_or(|c| dish.category() == c)
            && self.status.is_none_or(|s| dish.status() == s)
    }
}

/// Main menu service.
pub struct MenuService {
    store: Box<dyn DishStore>,
    commit: Mutex<()>,
    clock: fn() -> DateTime<Utc>,
}

impl MenuService {
    /// Create a new menu service over the given store.
    pub fn new(store: Box<dyn DishStore>) -> Self {
        Self {
            store,
            commit: Mutex::new(()),
            clock: Utc::now,
        }
    }

    /// Replace the clock used for `createdAt`/`updatedAt`.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Validate and add a new dish.
    ///
    /// On any failure, schema or uniqueness, nothing is stored and every
    /// field error is returned together.
    #[instrument(skip_all)]
    pub fn create_dish(&self, raw: &Value) -> MenuResult<Dish> {
        let _guard = self.lock()?;

        let existing = self.name_snapshot()?;
        let draft = match validate_against(CreationSchema, raw, &existing, None) {
            Ok(draft) => draft,
            Err(errors) => {
                warn!(errors = %errors, "Dish rejected");
                return Err(errors.into());
            }
        };

        let dish = Dish::create(DishId::generate(), draft, (self.clock)());
        self.store.insert(dish.clone())?;

        info!(id = %dish.id(), name = %dish.name(), "Dish created");
        Ok(dish)
    }

    /// Validate and apply a partial update.
    ///
    /// The dish keeps its own name without colliding with itself. An empty
    /// update returns the dish unchanged and writes nothing.
    #[instrument(skip_all, fields(id = %id))]
    pub fn update_dish(&self, id: &DishId, raw: &Value) -> MenuResult<Dish> {
        let _guard = self.lock()?;

        let current = self.require(id)?;
        let existing = self.name_snapshot()?;
        let patch = match validate_against(UpdateSchema, raw, &existing, Some(id)) {
            Ok(patch) => patch,
            Err(errors) => {
                warn!(errors = %errors, "Update rejected");
                return Err(errors.into());
            }
        };

        self.commit_patch(&current, &patch)
    }

    /// Flip a dish between `Available` and `SoldOut`.
    #[instrument(skip_all, fields(id = %id))]
    pub fn toggle_status(&self, id: &DishId) -> MenuResult<Dish> {
        let _guard = self.lock()?;

        let current = self.require(id)?;
        let patch = DishPatch::status_only(current.status().toggled());
        self.commit_patch(&current, &patch)
    }

    /// Remove a dish.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete_dish(&self, id: &DishId) -> MenuResult<Dish> {
        let _guard = self.lock()?;

        let removed = self.store.remove(id)?;
        info!(name = %removed.name(), "Dish deleted");
        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Get a dish by id.
    pub fn get_dish(&self, id: &DishId) -> MenuResult<Dish> {
        self.require(id)
    }

    /// List dishes in insertion order, optionally filtered.
    #[instrument(skip_all, fields(category = ?filter.category, status = ?filter.status))]
    pub fn list_dishes(&self, filter: &DishFilter) -> MenuResult<Vec<Dish>> {
        let dishes: Vec<Dish> = self
            .store
            .list()?
            .into_iter()
            .filter(|dish| filter.matches(dish))
            .collect();
        debug!(count = dishes.len(), "Dishes listed");
        Ok(dishes)
    }

    /// Whether `name` is free, optionally ignoring one dish.
    pub fn is_name_available(&self, name: &str, exclude_id: Option<&DishId>) -> MenuResult<bool> {
        let existing = self.name_snapshot()?;
        Ok(is_name_unique(name, &existing, exclude_id))
    }

    // -------------------------------------------------------------------------
    // Dry runs
    // -------------------------------------------------------------------------

    /// Run the creation checks without storing anything.
    ///
    /// The outer `Result` carries store failures; the inner one carries the
    /// validation outcome.
    #[instrument(skip_all)]
    pub fn check_creation(&self, raw: &Value) -> MenuResult<ValidationResult<DishDraft>> {
        let existing = self.name_snapshot()?;
        Ok(validate_against(CreationSchema, raw, &existing, None))
    }

    /// Run the update checks for an existing dish without storing anything.
    #[instrument(skip_all, fields(id = %id))]
    pub fn check_update(
        &self,
        id: &DishId,
        raw: &Value,
    ) -> MenuResult<ValidationResult<DishPatch>> {
        self.require(id)?;
        let existing = self.name_snapshot()?;
        Ok(validate_against(UpdateSchema, raw, &existing, Some(id)))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn lock(&self) -> MenuResult<MutexGuard<'_, ()>> {
        self.commit
            .lock()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    /// `{id, name}` of every stored dish, for the uniqueness check.
    fn name_snapshot(&self) -> MenuResult<Vec<DishSummary>> {
        Ok(self.store.list()?.iter().map(Dish::summary).collect())
    }

    fn require(&self, id: &DishId) -> MenuResult<Dish> {
        self.store.get(id)?.ok_or_else(|| {
            ApplicationError::DishNotFound {
                id: id.to_string(),
            }
            .into()
        })
    }

    fn commit_patch(&self, current: &Dish, patch: &DishPatch) -> MenuResult<Dish> {
        if patch.is_empty() {
            debug!("Empty update, nothing to store");
            return Ok(current.clone());
        }

        let updated = current.apply(patch, (self.clock)());
        self.store.replace(updated.clone())?;

        info!(status = %updated.status(), "Dish updated");
        Ok(updated)
    }
}

/// Schema validation plus the uniqueness check, reported together.
///
/// Uniqueness is only checked when the name itself is valid, so a name
/// failure and `NAME_EXISTS` never appear side by side.
fn validate_against<S: DishSchema>(
    schema: S,
    raw: &Value,
    existing: &[DishSummary],
    exclude_id: Option<&DishId>,
) -> ValidationResult<S::Output> {
    let mut errors = ValidationErrors::new();

    if let Ok(Some(name)) = validate_name(raw.get("name"), Presence::Optional)
        && let Err(duplicate) = ensure_name_unique(name.as_str(), existing, exclude_id)
    {
        errors.merge(duplicate);
    }

    match schema.validate(raw) {
        Ok(output) => errors.into_result(|| output),
        Err(field_errors) => {
            errors.merge(field_errors);
            Err(errors)
        }
    }
}
