//! Implementation of the `carta list` command.

use chrono::Local;

use carta_core::{
    application::DishFilter,
    domain::{Category, Dish, DishStatus},
    error::MenuError,
};

use super::open_service;
use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let filter = build_filter(&args)?;
    let service = open_service(&config)?;
    let dishes = service.list_dishes(&filter)?;

    // The global JSON format overrides the per-command one.
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if dishes.is_empty() {
                output.info("No dishes match")?;
                return Ok(());
            }
            let show_ids = config.display.show_ids;
            let mut headers = vec!["Nombre", "Categoría", "Precio", "Estado"];
            if show_ids {
                headers.insert(0, "ID");
            }
            let rows: Vec<Vec<String>> = dishes
                .iter()
                .map(|dish| table_row(dish, show_ids, &output))
                .collect();
            output.table(&headers, &rows)?;
        }

        ListFormat::List => {
            for dish in &dishes {
                output.data(&format!(
                    "{} · {} · {} · {}",
                    dish.name(),
                    dish.price().currency(),
                    dish.category(),
                    output.status_label(dish.status().label(), dish.status().is_available()),
                ))?;
                if let Some(description) = dish.description() {
                    output.data(&format!("    {}", description))?;
                }
                output.data(&format!(
                    "    {} · updated {}",
                    dish.id(),
                    dish.updated_at()
                        .with_timezone(&Local)
                        .format("%Y-%m-%d %H:%M")
                ))?;
            }
        }

        ListFormat::Json => output.json(&dishes)?,

        ListFormat::Csv => {
            output.data("id,name,description,price,category,status,createdAt,updatedAt")?;
            for dish in &dishes {
                output.data(&csv_row(dish))?;
            }
        }
    }

    Ok(())
}

fn build_filter(args: &ListArgs) -> CliResult<DishFilter> {
    let category = args
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(|e| CliError::Core(MenuError::from(e)))?;
    let status = args
        .status
        .as_deref()
        .map(str::parse::<DishStatus>)
        .transpose()
        .map_err(|e| CliError::Core(MenuError::from(e)))?;
    Ok(DishFilter { category, status })
}

fn table_row(dish: &Dish, show_ids: bool, output: &OutputManager) -> Vec<String> {
    let mut row = Vec::with_capacity(5);
    if show_ids {
        row.push(dish.id().to_string());
    }
    row.push(dish.name().to_string());
    row.push(dish.category().to_string());
    row.push(dish.price().currency());
    row.push(output.status_label(dish.status().label(), dish.status().is_available()));
    row
}

fn csv_row(dish: &Dish) -> String {
    [
        csv_field(dish.id().as_str()),
        csv_field(dish.name().as_str()),
        csv_field(dish.description().map(|d| d.as_str()).unwrap_or_default()),
        dish.price().formatted(),
        csv_field(dish.category().label()),
        dish.status().as_str().to_owned(),
        dish.created_at().to_rfc3339(),
        dish.updated_at().to_rfc3339(),
    ]
    .join(",")
}

/// Quote a field when it holds a comma, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
