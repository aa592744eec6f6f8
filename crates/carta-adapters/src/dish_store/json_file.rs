//! Dish store persisted as a JSON file.
//!
//! The file is read once on open. Every successful mutation rewrites the
//! whole file. A failed write rolls the in-memory state back so the store
//! never reports a change it did not persist.

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use carta_core::{
    application::{ApplicationError, ports::DishStore},
    domain::{Dish, DishId},
    error::{MenuError, MenuResult},
};

use super::memory::InMemoryDishStore;
use crate::seed;

const FORMAT_VERSION: u32 = 1;

/// On-disk layout.
#[derive(Debug, Serialize, Deserialize)]
struct MenuFile {
    version: u32,
    dishes: Vec<Dish>,
}

/// File-backed dish store.
#[derive(Clone)]
pub struct JsonFileDishStore {
    path: PathBuf,
    memory: InMemoryDishStore,
}

impl JsonFileDishStore {
    /// Open the menu file at `path`.
    ///
    /// A missing file starts from the starter menu when `seed_if_missing` is set, or
    /// empty otherwise. Nothing is written until the first mutation.
    pub fn open(path: impl Into<PathBuf>, seed_if_missing: bool) -> MenuResult<Self> {
        let path = path.into();

        let dishes = match fs::read_to_string(&path) {
            Ok(text) => {
                let dishes = parse(&path, &text)?;
                debug!(path = %path.display(), count = dishes.len(), "Menu file loaded");
                dishes
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), seed_if_missing, "Menu file not found, starting fresh");
                if seed_if_missing {
                    seed::seed_dishes(Utc::now())?
                } else {
                    Vec::new()
                }
            }
            Err(e) => return Err(map_io_error(&path, e, "read menu file")),
        };

        let memory = InMemoryDishStore::from_dishes(dishes).map_err(|e| corrupt(&path, e))?;
        Ok(Self { path, memory })
    }

    /// Location of the menu file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a mutation, then persist; undo it if persisting fails.
    fn mutate<T>(&self, op: impl FnOnce(&InMemoryDishStore) -> MenuResult<T>) -> MenuResult<T> {
        let before = self.memory.snapshot()?;
        let out = op(&self.memory)?;

        if let Err(e) = self.persist() {
            warn!(error = %e, "Persisting menu failed, rolling back");
            self.memory.restore(before)?;
            return Err(e);
        }
        Ok(out)
    }

    fn persist(&self) -> MenuResult<()> {
        let file = MenuFile {
            version: FORMAT_VERSION,
            dishes: self.memory.list()?,
        };
        let text = serde_json::to_string_pretty(&file).map_err(|e| MenuError::Internal {
            message: format!("Failed to serialize menu: {}", e),
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        fs::write(&self.path, text).map_err(|e| map_io_error(&self.path, e, "write menu file"))?;

        debug!(path = %self.path.display(), count = file.dishes.len(), "Menu file written");
        Ok(())
    }
}

impl DishStore for JsonFileDishStore {
    fn list(&self) -> MenuResult<Vec<Dish>> {
        self.memory.list()
    }

    fn get(&self, id: &DishId) -> MenuResult<Option<Dish>> {
        self.memory.get(id)
    }

    fn insert(&self, dish: Dish) -> MenuResult<()> {
        self.mutate(|memory| memory.insert(dish))
    }

    fn replace(&self, dish: Dish) -> MenuResult<()> {
        self.mutate(|memory| memory.replace(dish))
    }

    fn remove(&self, id: &DishId) -> MenuResult<Dish> {
        self.mutate(|memory| memory.remove(id))
    }

    fn len(&self) -> MenuResult<usize> {
        self.memory.len()
    }
}

fn parse(path: &Path, text: &str) -> MenuResult<Vec<Dish>> {
    let file: MenuFile = serde_json::from_str(text).map_err(|e| corrupt(path, e))?;
    if file.version != FORMAT_VERSION {
        return Err(corrupt(
            path,
            format!("unsupported format version {}", file.version),
        ));
    }
    let mut names = HashSet::with_capacity(file.dishes.len());
    for dish in &file.dishes {
        dish.validate().map_err(|e| corrupt(path, e))?;
        if !names.insert(dish.name().normalized()) {
            return Err(corrupt(
                path,
                format!("duplicate dish name '{}'", dish.name()),
            ));
        }
    }
    Ok(file.dishes)
}

fn corrupt(path: &Path, reason: impl ToString) -> MenuError {
    ApplicationError::CorruptStore {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> MenuError {
    ApplicationError::Storage {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
