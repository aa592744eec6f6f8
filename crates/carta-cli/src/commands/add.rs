//! `carta add`: validate and store a new dish.
//!
//! With no field flags on a terminal, the fields are asked for one by one,
//! using the labels and placeholders of the dish form.

use std::io::IsTerminal;

use serde_json::{Map, Value};
use tracing::instrument;

use super::{open_service, parse_json_object, record_from_flags, report_dish};
use crate::{cli::AddArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(args: AddArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let raw = match &args.json {
        Some(text) => parse_json_object(text)?,
        None => {
            let record = record_from_flags(&args.fields);
            if record.is_empty() && std::io::stdin().is_terminal() {
                Value::Object(prompt_fields()?)
            } else {
                Value::Object(record)
            }
        }
    };

    let service = open_service(&config)?;
    let dish = service.create_dish(&raw)?;

    report_dish(&output, "Added", &dish)
}

#[cfg(feature = "interactive")]
fn prompt_fields() -> CliResult<Map<String, Value>> {
    use carta_core::domain::{Category, DishField, FORM_FIELDS, InputKind};
    use dialoguer::{Input, Select};

    use crate::{cli::DishFieldArgs, error::CliError};

    let prompt_error = |e: dialoguer::Error| CliError::InvalidInput {
        message: "failed to read dish fields".into(),
        source: Some(Box::new(e)),
    };

    let mut fields = DishFieldArgs::default();
    for form in FORM_FIELDS {
        let value = if form.input == InputKind::Select {
            let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
            let chosen = Select::new()
                .with_prompt(form.label)
                .items(&labels[..])
                .default(0)
                .interact()
                .map_err(prompt_error)?;
            labels[chosen].to_owned()
        } else {
            let prompt = match form.placeholder {
                Some(hint) => format!("{} ({})", form.label, hint),
                None => form.label.to_owned(),
            };
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(!form.required)
                .interact_text()
                .map_err(prompt_error)?
        };

        // An empty optional answer leaves the key out.
        if value.is_empty() {
            continue;
        }
        match form.field {
            DishField::Name => fields.name = Some(value),
            DishField::Description => fields.description = Some(value),
            DishField::Price => fields.price = Some(value),
            DishField::Category => fields.category = Some(value),
            DishField::Status => {}
        }
    }

    Ok(record_from_flags(&fields))
}

#[cfg(not(feature = "interactive"))]
fn prompt_fields() -> CliResult<Map<String, Value>> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
