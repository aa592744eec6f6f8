//! In-memory dish store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::Utc;
use tracing::debug;

use carta_core::{
    application::{ApplicationError, ports::DishStore},
    domain::{Dish, DishId},
    error::MenuResult,
};

use crate::seed;

/// Dishes keyed by id, plus the order they were added in.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Arena {
    order: Vec<DishId>,
    by_id: HashMap<DishId, Dish>,
}

impl Arena {
    pub(crate) fn from_dishes(dishes: Vec<Dish>) -> Result<Self, ApplicationError> {
        let mut arena = Self::default();
        for dish in dishes {
            arena.insert(dish)?;
        }
        Ok(arena)
    }

    pub(crate) fn dishes(&self) -> Vec<Dish> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .cloned()
            .collect()
    }

    fn insert(&mut self, dish: Dish) -> Result<(), ApplicationError> {
        if self.by_id.contains_key(dish.id()) {
            return Err(ApplicationError::DuplicateId {
                id: dish.id().to_string(),
            });
        }
        self.order.push(dish.id().clone());
        self.by_id.insert(dish.id().clone(), dish);
        Ok(())
    }

    fn replace(&mut self, dish: Dish) -> Result<(), ApplicationError> {
        match self.by_id.get_mut(dish.id()) {
            Some(slot) => {
                *slot = dish;
                Ok(())
            }
            None => Err(not_found(dish.id())),
        }
    }

    fn remove(&mut self, id: &DishId) -> Result<Dish, ApplicationError> {
        let dish = self.by_id.remove(id).ok_or_else(|| not_found(id))?;
        self.order.retain(|entry| entry != id);
        Ok(dish)
    }
}

fn not_found(id: &DishId) -> ApplicationError {
    ApplicationError::DishNotFound { id: id.to_string() }
}

/// Thread-safe in-memory dish store.
///
/// Clones share the same dishes.
#[derive(Clone, Default)]
pub struct InMemoryDishStore {
    inner: Arc<RwLock<Arena>>,
}

impl InMemoryDishStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the starter menu.
    pub fn with_seed() -> MenuResult<Self> {
        Self::from_dishes(seed::seed_dishes(Utc::now())?)
    }

    /// Create a store holding the given dishes, in order.
    pub fn from_dishes(dishes: Vec<Dish>) -> MenuResult<Self> {
        let arena = Arena::from_dishes(dishes)?;
        debug!(count = arena.order.len(), "In-memory store loaded");
        Ok(Self {
            inner: Arc::new(RwLock::new(arena)),
        })
    }

    pub(crate) fn snapshot(&self) -> MenuResult<Arena> {
        Ok(self.read()?.clone())
    }

    pub(crate) fn restore(&self, arena: Arena) -> MenuResult<()> {
        *self.write()? = arena;
        Ok(())
    }

    fn read(&self) -> MenuResult<RwLockReadGuard<'_, Arena>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> MenuResult<RwLockWriteGuard<'_, Arena>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl DishStore for InMemoryDishStore {
    fn list(&self) -> MenuResult<Vec<Dish>> {
        Ok(self.read()?.dishes())
    }

    fn get(&self, id: &DishId) -> MenuResult<Option<Dish>> {
        Ok(self.read()?.by_id.get(id).cloned())
    }

    fn insert(&self, dish: Dish) -> MenuResult<()> {
        Ok(self.write()?.insert(dish)?)
    }

    fn replace(&self, dish: Dish) -> MenuResult<()> {
        Ok(self.write()?.replace(dish)?)
    }

    fn remove(&self, id: &DishId) -> MenuResult<Dish> {
        Ok(self.write()?.remove(id)?)
    }

    fn len(&self) -> MenuResult<usize> {
        Ok(self.read()?.order.len())
    }
}

#[cfg(test)]
mod tests {
    use carta_core::domain::{CreationSchema, DishSchema, DishStatus};
    use serde_json::json;

    use super::*;

    fn dish(id: &str, name: &str) -> Dish {
        let draft = CreationSchema
            .validate(&json!({"name": name, "price": 5, "category": "Bebidas"}))
            .unwrap();
        Dish::create(DishId::try_new(id).unwrap(), draft, Utc::now())
    }

    #[test]
    fn keeps_insertion_order() {
        let store = InMemoryDishStore::new();
        store.insert(dish("b", "Horchata")).unwrap();
        store.insert(dish("a", "Jamaica")).unwrap();
        store.insert(dish("c", "Tamarindo")).unwrap();

        let ids: Vec<_> = store
            .list()
            .unwrap()
            .iter()
            .map(|d| d.id().to_string())
            .collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let store = InMemoryDishStore::new();
        store.insert(dish("a", "Horchata")).unwrap();
        let err = store.insert(dish("a", "Jamaica")).unwrap_err();
        assert!(err.to_string().contains("already in use"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn replace_keeps_position() {
        let store = InMemoryDishStore::new();
        store.insert(dish("a", "Horchata")).unwrap();
        store.insert(dish("b", "Jamaica")).unwrap();

        let sold_out = store
            .get(&DishId::try_new("a").unwrap())
            .unwrap()
            .unwrap()
            .toggled(Utc::now());
        store.replace(sold_out).unwrap();

        let dishes = store.list().unwrap();
        assert_eq!(dishes[0].id().as_str(), "a");
        assert_eq!(dishes[0].status(), DishStatus::SoldOut);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let store = InMemoryDishStore::new();
        let ghost = DishId::try_new("ghost").unwrap();
        assert!(store.get(&ghost).unwrap().is_none());
        assert!(store.replace(dish("ghost", "Atole")).is_err());
        assert!(store.remove(&ghost).is_err());
    }

    #[test]
    fn remove_returns_the_dish() {
        let store = InMemoryDishStore::new();
        store.insert(dish("a", "Horchata")).unwrap();
        store.insert(dish("b", "Jamaica")).unwrap();

        let removed = store.remove(&DishId::try_new("a").unwrap()).unwrap();
        assert_eq!(removed.name().as_str(), "Horchata");
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.list().unwrap()[0].id().as_str(), "b");
    }

    #[test]
    fn clones_share_state() {
        let store = InMemoryDishStore::new();
        let other = store.clone();
        store.insert(dish("a", "Horchata")).unwrap();
        assert_eq!(other.len().unwrap(), 1);

        other.remove(&DishId::try_new("a").unwrap()).unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn seeded_store_has_three_dishes() {
        let store = InMemoryDishStore::with_seed().unwrap();
        assert_eq!(store.len().unwrap(), 3);
    }
}
