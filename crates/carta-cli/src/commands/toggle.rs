//! `carta toggle`: flip a dish between available and sold out.

use super::{open_service, parse_id, report_dish};
use crate::{cli::IdArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: IdArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let id = parse_id(&args.id)?;
    let service = open_service(&config)?;

    let dish = service.toggle_status(&id)?;
    let verb = if dish.status().is_available() {
        "Now available:"
    } else {
        "Sold out:"
    };
    report_dish(&output, verb, &dish)
}
