use anyhow::Result;
use std::path::Path;

use expression_builder::BuilderConfig;

use crate::cli::commands::{ discover, OutputFormat };
use crate::cli::ui;

/// Show the details of a single property
pub fn execute(
    config: &BuilderConfig,
    schema_path: &Path,
    id: &str,
    catalog_path: Option<&Path>,
    locale: Option<&str>,
    format: OutputFormat
) -> Result<()> {
    let properties = discover(config, schema_path, catalog_path, locale)?;
    let property = properties.require(id)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(property)?);
        }
        OutputFormat::Text => {
            let info = property.info();
            ui::print_header(&property.to_string());
            ui::print_result("Id", property.id());
            ui::print_result("Name", property.name());
            ui::print_result("Field", &info.name);
            ui::print_result("Type", &info.field_type.type_name());
            ui::print_result("Readable", &info.readable.to_string());
            ui::print_result("Writable", &info.writable.to_string());
            ui::print_result("Equals any of", &property.match_any.to_string());
        }
    }

    Ok(())
}
