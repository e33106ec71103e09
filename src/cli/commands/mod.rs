use anyhow::{ anyhow, Result };
use log::info;
use std::fs;
use std::path::Path;

use expression_builder::{
    BuilderConfig,
    PropertyCollection,
    PropertyDiscovery,
    PropertyLoader,
    ResourceCatalog,
    TypeSchema,
};

pub mod list;
pub mod show;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn parse_output_format(format_str: &str) -> Result<OutputFormat> {
    match format_str.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(anyhow!("Unsupported output format: {}", format_str)),
    }
}

/// Load the schema, catalog and loader settings, and discover the properties.
/// Command line catalog and locale take precedence over the config file.
pub fn discover(
    config: &BuilderConfig,
    schema_path: &Path,
    catalog_path: Option<&Path>,
    locale: Option<&str>
) -> Result<PropertyCollection> {
    let contents = fs::read_to_string(schema_path)
        .map_err(|e| anyhow!("Failed to read schema {}: {}", schema_path.display(), e))?;
    let schema = TypeSchema::from_yaml_str(&contents)?;
    info!("Loaded schema {} with {} fields", schema.name, schema.fields.len());

    let mut loader = PropertyLoader::new(config.loader.clone());

    let catalog_path = catalog_path.or(config.catalog.as_deref());
    if let Some(path) = catalog_path {
        let mut catalog = ResourceCatalog::from_file(path)?;
        if let Some(locale) = locale.or(config.locale.as_deref()) {
            catalog = catalog.with_locale(locale);
        }
        info!("Using resource catalog {} (locales: {})", path.display(), catalog.locales().join(", "));
        loader = loader.with_resolver(catalog);
    }

    Ok(loader.load_schema(&schema)?)
}
