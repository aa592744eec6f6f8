//! `carta categories`: print the fixed category catalogue.

use serde_json::json;

use carta_core::domain::Category;

use crate::{
    cli::OutputFormat,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(output: OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let catalogue: Vec<_> = Category::ALL
            .iter()
            .map(|c| json!({ "id": c.id(), "label": c.label(), "slug": c.slug() }))
            .collect();
        output.json(&catalogue)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = Category::ALL
        .iter()
        .map(|c| vec![c.id().to_owned(), c.label().to_owned(), c.slug().to_owned()])
        .collect();
    output.table(&["ID", "Categoría", "Slug"], &rows)?;
    Ok(())
}
