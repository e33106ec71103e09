use log::debug;
use serde::{ Deserialize, Serialize };
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::ConfigError;
use crate::errors::{ ExpressionError, ExpressionResult };
use crate::traits::name_resolver::NameResolver;

pub const DEFAULT_LOCALE: &str = "default";

/// Localized display names keyed by resource key.
///
/// Lookups try the active locale first and then the default locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCatalog {
    #[serde(default = "default_locale")]
    pub default_locale: String,

    #[serde(default)]
    pub active_locale: Option<String>,

    /// locale -> resource key -> text
    #[serde(default)]
    pub entries: HashMap<String, HashMap<String, String>>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        ResourceCatalog {
            default_locale: default_locale(),
            active_locale: None,
            entries: HashMap::new(),
        }
    }
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(contents: &str) -> ExpressionResult<Self> {
        let catalog: ResourceCatalog = serde_yaml::from_str(contents).map_err(ConfigError::from)?;
        Ok(catalog)
    }

    pub fn from_json_str(contents: &str) -> ExpressionResult<Self> {
        let catalog: ResourceCatalog = serde_json::from_str(contents).map_err(ConfigError::from)?;
        Ok(catalog)
    }

    /// Load a catalog from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: &Path) -> ExpressionResult<Self> {
        let contents = fs::read_to_string(path)?;
        debug!("Loading resource catalog from {}", path.display());
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            other =>
                Err(
                    ExpressionError::ResourceError(
                        format!(
                            "Unsupported catalog format {:?} for {}",
                            other.unwrap_or(""),
                            path.display()
                        )
                    )
                ),
        }
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>
    ) {
        self.entries.entry(locale.into()).or_default().insert(key.into(), text.into());
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.active_locale = Some(locale.into());
        self
    }

    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.entries
            .get(locale)
            .and_then(|texts| texts.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

impl NameResolver for ResourceCatalog {
    fn resolve(&self, key: &str) -> Option<String> {
        let active = self.active_locale.as_deref().unwrap_or(&self.default_locale);
        self.lookup(active, key)
            .or_else(|| self.lookup(&self.default_locale, key))
            .map(str::to_string)
    }
}
