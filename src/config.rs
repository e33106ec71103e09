use serde::{ Deserialize, Serialize };
use std::collections::HashSet;
use std::fs;
use std::path::{ Path, PathBuf };
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON file: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Default nesting depth followed when discovering properties
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Options for the property loader
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoaderConfig {
    /// Maximum nesting depth of object and list fields to descend into
    pub max_depth: usize,

    /// Property ids that should always offer "equals any of"
    pub match_any: HashSet<String>,

    /// Skip fields without a read accessor
    pub skip_unreadable: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            match_any: HashSet::new(),
            skip_unreadable: true,
        }
    }
}

impl LoaderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_depth".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.match_any.iter().any(|id| id.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: "match_any".to_string(),
                message: "property ids must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Top level configuration, read from a YAML file by the CLI
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct BuilderConfig {
    /// Property loader options
    pub loader: LoaderConfig,

    /// Resource catalog used to resolve display names
    pub catalog: Option<PathBuf>,

    /// Active locale for display names
    pub locale: Option<String>,
}

impl BuilderConfig {
    /// Load configuration from a YAML file.
    /// A relative catalog path is resolved against the config file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&contents)?;
        if let (Some(catalog), Some(dir)) = (config.catalog.as_ref(), path.parent()) {
            if catalog.is_relative() {
                let resolved = dir.join(catalog);
                config.catalog = Some(resolved);
            }
        }
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: BuilderConfig = serde_yaml::from_str(contents)?;
        config.loader.validate()?;
        Ok(config)
    }
}
