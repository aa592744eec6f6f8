//! `carta edit`: apply a partial update to a dish.

use serde_json::Value;
use tracing::instrument;

use super::{open_service, parse_id, parse_json_object, record_from_flags, report_dish, status_value};
use crate::{cli::EditArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(args: EditArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let id = parse_id(&args.id)?;
    let raw = match &args.json {
        Some(text) => parse_json_object(text)?,
        None => Value::Object(changes_from_flags(&args)),
    };

    let service = open_service(&config)?;
    let before = service.get_dish(&id)?;
    let dish = service.update_dish(&id, &raw)?;

    if dish == before {
        output.info("Nothing to change")?;
    }
    report_dish(&output, "Updated", &dish)
}

fn changes_from_flags(args: &EditArgs) -> serde_json::Map<String, Value> {
    let mut record = record_from_flags(&args.fields);
    if let Some(status) = &args.status {
        record.insert("status".into(), status_value(status));
    }
    if args.clear_description {
        record.insert("description".into(), Value::Null);
    }
    record
}
