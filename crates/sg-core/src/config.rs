//! Configuration structures for schemagen.
//!
//! - [`SchemaConfig`] - One schema to generate (name, output folder, ignore list)
//! - [`Config`] - Root configuration: casings, type overrides, schemas
//!
//! All configuration types implement [`Default`] and deserialize with missing
//! fields filled in from the defaults.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::{Casing, ConfigError, FxHashMap, FxHashSet, TypeMap};

/// Configuration for a single database schema.
///
/// # Examples
///
/// ```
/// use sg_core::SchemaConfig;
///
/// let schema = SchemaConfig::new("public", "src/models");
/// assert_eq!(schema.model_folder, "src/models");
/// assert!(schema.ignore.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Database schema name (e.g. `public`).
    pub name: String,

    /// Folder receiving the generated modules for this schema.
    pub model_folder: Utf8PathBuf,

    /// Table and view names to leave out of generation.
    pub ignore: Vec<String>,
}

impl SchemaConfig {
    /// Creates a schema configuration with an empty ignore list.
    #[must_use]
    pub fn new(name: impl Into<String>, model_folder: impl Into<Utf8PathBuf>) -> Self {
        Self {
            name: name.into(),
            model_folder: model_folder.into(),
            ignore: Vec::new(),
        }
    }

    /// Adds entity names to the ignore list.
    #[must_use]
    pub fn with_ignore(mut self, names: &[&str]) -> Self {
        self.ignore.extend(names.iter().map(ToString::to_string));
        self
    }
}

/// Root configuration for schemagen.
///
/// # Examples
///
/// ```
/// use sg_core::{Casing, Config};
///
/// let config = Config::default();
/// assert_eq!(config.source_casing, Casing::Snake);
/// assert_eq!(config.filename_casing, Casing::Pascal);
/// assert_eq!(config.key_casing, Casing::Camel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Casing of raw database names.
    pub source_casing: Casing,

    /// Casing of generated module file names and import paths.
    pub filename_casing: Casing,

    /// Casing of keys in the index module's type maps.
    pub key_casing: Casing,

    /// Whether to clear each model folder before generating into it.
    pub pre_delete_model_folder: bool,

    /// Overrides merged on top of the built-in type map.
    pub custom_type_map: FxHashMap<String, String>,

    /// Schemas to generate, in processing order.
    pub schemas: Vec<SchemaConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_casing: Casing::Snake,
            filename_casing: Casing::Pascal,
            key_casing: Casing::Camel,
            pre_delete_model_folder: false,
            custom_type_map: FxHashMap::default(),
            schemas: Vec::new(),
        }
    }
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a configuration file.
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks that every schema has a name and a model folder, and that no
    /// schema is listed twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = FxHashSet::default();

        for (index, schema) in self.schemas.iter().enumerate() {
            if schema.name.trim().is_empty() {
                return Err(ConfigError::invalid_option(
                    format!("schemas[{index}].name"),
                    "must not be empty",
                ));
            }
            if schema.model_folder.as_str().is_empty() {
                return Err(ConfigError::invalid_option(
                    format!("schemas[{index}].model_folder"),
                    "must not be empty",
                ));
            }
            if !seen.insert(schema.name.as_str()) {
                return Err(ConfigError::DuplicateSchema(schema.name.clone()));
            }
        }

        Ok(())
    }

    /// The built-in type map with [`Config::custom_type_map`] merged on top.
    #[must_use]
    pub fn type_map(&self) -> TypeMap {
        TypeMap::default().with_overrides(&self.custom_type_map)
    }
}
