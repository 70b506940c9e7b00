//! Editor configuration and token source loading.
//!
//! ```json
//! {
//!   "schema": "slider/tokens.json",
//!   "base_tokens": "tokens.json",
//!   "descriptions": "slider/descriptions.json",
//!   "style_prefix": "--",
//!   "log_level": "info"
//! }
//! ```
//!
//! Relative paths are resolved against the directory of the config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::descriptions::DescriptionTable;
use crate::error::ConfigError;
use crate::pipeline::STYLE_VAR_PREFIX;
use crate::schema::{BaseTokenTable, ComponentTokenSchema};

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Where the editor reads its inputs from, and how it writes style variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    pub schema: PathBuf,
    pub base_tokens: PathBuf,
    #[serde(default)]
    pub descriptions: Option<PathBuf>,
    #[serde(default = "default_style_prefix")]
    pub style_prefix: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub root: PathBuf,
}

fn default_style_prefix() -> String {
    STYLE_VAR_PREFIX.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// The three static inputs of an editing session.
#[derive(Debug, Clone)]
pub struct TokenSources {
    pub schema: ComponentTokenSchema,
    pub base: BaseTokenTable,
    pub descriptions: DescriptionTable,
}

impl EditorConfig {
    /// Parse a config from JSON. Relative paths resolve against the working
    /// directory.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_json(&read(path)?)?;
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Read and parse the schema, base table and descriptions.
    ///
    /// Without a descriptions path the built-in slider table is used.
    pub fn load_sources(&self) -> Result<TokenSources> {
        let schema = ComponentTokenSchema::from_json(&read(&self.resolve_path(&self.schema))?)?;
        let base = BaseTokenTable::from_json(&read(&self.resolve_path(&self.base_tokens))?)?;
        let descriptions = match &self.descriptions {
            Some(path) => DescriptionTable::from_json(&read(&self.resolve_path(path))?)?,
            None => DescriptionTable::slider(),
        };

        Ok(TokenSources {
            schema,
            base,
            descriptions,
        })
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Tests
// =============================================================================
