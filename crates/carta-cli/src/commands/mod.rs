//! Command handlers, one module per subcommand.
//!
//! Handlers turn flags into the raw JSON record the core schemas expect,
//! call [`MenuService`], and render the result. They never validate dish
//! fields themselves.

pub mod add;
pub mod categories;
pub mod completions;
pub mod config;
pub mod edit;
pub mod init;
pub mod list;
pub mod remove;
pub mod toggle;
pub mod validate;

use serde_json::{Map, Value};
use tracing::debug;

use carta_adapters::{InMemoryDishStore, JsonFileDishStore};
use carta_core::{
    application::{DishStore, MenuService},
    domain::{Category, Dish, DishId, DishStatus},
    error::MenuError,
};

use crate::{
    cli::DishFieldArgs,
    config::{AppConfig, StoreBackend},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Build the menu service over the configured store.
pub fn open_service(config: &AppConfig) -> CliResult<MenuService> {
    let store: Box<dyn DishStore> = match config.store.backend {
        StoreBackend::Memory => {
            debug!(seed = config.store.seed, "Using in-memory store");
            if config.store.seed {
                Box::new(InMemoryDishStore::with_seed()?)
            } else {
                Box::new(InMemoryDishStore::new())
            }
        }
        StoreBackend::File => {
            let path = config.menu_path();
            debug!(path = %path.display(), "Using menu file");
            Box::new(JsonFileDishStore::open(path, config.store.seed)?)
        }
    };
    Ok(MenuService::new(store))
}

/// Parse a dish id argument.
pub fn parse_id(raw: &str) -> CliResult<DishId> {
    DishId::try_new(raw).map_err(|e| CliError::Core(MenuError::from(e)))
}

/// Parse a `--json` argument, which must be an object.
pub fn parse_json_object(text: &str) -> CliResult<Value> {
    let value: Value = serde_json::from_str(text).with_cli_context(|| "Failed to parse --json")?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(CliError::InvalidInput {
            message: "--json must be a JSON object".into(),
            source: None,
        })
    }
}

/// Raw record from individual field flags.
///
/// Only flags that were given become keys. Prices are passed as JSON numbers
/// when they parse as one and as strings otherwise, so the price rules decide.
/// Category and status accept lenient spellings and are mapped to their
/// canonical form; anything unrecognised is passed through untouched.
pub fn record_from_flags(fields: &DishFieldArgs) -> Map<String, Value> {
    let mut record = Map::new();

    if let Some(name) = &fields.name {
        record.insert("name".into(), Value::String(name.clone()));
    }
    if let Some(description) = &fields.description {
        record.insert("description".into(), Value::String(description.clone()));
    }
    if let Some(price) = &fields.price {
        record.insert("price".into(), price_value(price));
    }
    if let Some(category) = &fields.category {
        let value = category
            .parse::<Category>()
            .map(|c| c.label().to_owned())
            .unwrap_or_else(|_| category.clone());
        record.insert("category".into(), Value::String(value));
    }

    record
}

/// Canonical status string for a lenient `--status` value.
pub fn status_value(raw: &str) -> Value {
    let value = raw
        .parse::<DishStatus>()
        .map(|s| s.as_str().to_owned())
        .unwrap_or_else(|_| raw.to_owned());
    Value::String(value)
}

fn price_value(text: &str) -> Value {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(number @ Value::Number(_)) => number,
        _ => Value::String(text.to_owned()),
    }
}

/// Print a dish after a mutation, honouring `--output-format json`.
pub fn report_dish(output: &OutputManager, verb: &str, dish: &Dish) -> CliResult<()> {
    if output.format() == crate::cli::OutputFormat::Json {
        output.json(dish)?;
        return Ok(());
    }

    output.success(&format!("{} {} ({})", verb, dish.name(), dish.id()))?;
    output.print(&format!(
        "  {} · {} · {}",
        dish.price().currency(),
        dish.category(),
        dish.status().label()
    ))?;
    if let Some(description) = dish.description() {
        output.print(&format!("  {}", description))?;
    }
    Ok(())
}
