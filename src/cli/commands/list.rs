use anyhow::Result;
use std::path::Path;

use expression_builder::BuilderConfig;

use crate::cli::commands::{ discover, OutputFormat };
use crate::cli::ui;

/// List every property discovered in a schema
pub fn execute(
    config: &BuilderConfig,
    schema_path: &Path,
    catalog_path: Option<&Path>,
    locale: Option<&str>,
    format: OutputFormat
) -> Result<()> {
    let properties = discover(config, schema_path, catalog_path, locale)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&properties)?);
        }
        OutputFormat::Text => {
            ui::print_header(&format!("Properties of {}", properties.type_name()));
            if properties.is_empty() {
                ui::print_warning("No filterable properties found.");
            }
            for property in &properties {
                ui::print_property(property);
            }
            ui::print_result("Total", &properties.len().to_string());
        }
    }

    Ok(())
}
