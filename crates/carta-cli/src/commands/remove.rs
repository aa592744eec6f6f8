//! `carta remove`: delete a dish, asking first unless `--yes`.

use std::io::IsTerminal;

use tracing::instrument;

use super::{open_service, parse_id};
use crate::{
    cli::{OutputFormat, RemoveArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(args: RemoveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let id = parse_id(&args.id)?;
    let service = open_service(&config)?;

    // Not-found is reported before asking anything.
    let dish = service.get_dish(&id)?;

    if !args.yes {
        if !std::io::stdin().is_terminal() {
            return Err(CliError::InvalidInput {
                message: "refusing to remove without --yes when not interactive".into(),
                source: None,
            });
        }
        if !confirm(&format!("Remove '{}'?", dish.name()))? {
            return Err(CliError::Cancelled);
        }
    }

    let removed = service.delete_dish(&id)?;
    if output.format() == OutputFormat::Json {
        output.json(&removed)?;
    } else {
        output.success(&format!("Removed {} ({})", removed.name(), removed.id()))?;
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read confirmation".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(_prompt: &str) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
