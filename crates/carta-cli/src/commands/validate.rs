//! `carta validate`: dry-run the dish checks without storing anything.
//!
//! Exits 0 when the input would be accepted and 2 when it would not, listing
//! every failure.

use serde::Serialize;

use carta_core::domain::{FieldError, ValidationErrors};

use super::{open_service, parse_id, parse_json_object};
use crate::{
    cli::{OutputFormat, ValidateArgs, ValidateMode},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON report for `--output-format json`.
#[derive(Debug, Serialize)]
struct Report {
    valid: bool,
    errors: Vec<ReportedError>,
}

#[derive(Debug, Serialize)]
struct ReportedError {
    field: &'static str,
    code: &'static str,
    message: &'static str,
}

impl From<&FieldError> for ReportedError {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.key(),
            code: error.kind.code(),
            message: error.message(),
        }
    }
}

pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let raw = parse_json_object(&args.json)?;
    let service = open_service(&config)?;

    let outcome: Result<(), ValidationErrors> = match args.mode {
        ValidateMode::Create => service.check_creation(&raw)?.map(drop),
        ValidateMode::Update => {
            let id = args.id.as_deref().ok_or_else(|| CliError::InvalidInput {
                message: "--id is required with --mode update".into(),
                source: None,
            })?;
            service.check_update(&parse_id(id)?, &raw)?.map(drop)
        }
    };

    if output.format() == OutputFormat::Json {
        let errors = match &outcome {
            Ok(()) => Vec::new(),
            Err(errors) => errors.iter().map(ReportedError::from).collect(),
        };
        output.json(&Report {
            valid: outcome.is_ok(),
            errors,
        })?;
        // Exit code still reports the failure.
        return outcome.map_err(|e| CliError::Core(e.into()));
    }

    match outcome {
        Ok(()) => {
            output.success("Input is valid")?;
            Ok(())
        }
        Err(errors) => Err(CliError::Core(errors.into())),
    }
}
