//! Sidebar configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the builtin catalog, resources and styling.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use navkit_core::{ConfigError, ConfigResult};

use crate::MenuStyle;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "NAVKIT_CONFIG";

/// A language the site can be switched to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    /// Culture code used in URLs and resource tables, e.g. `"lt-LT"`.
    pub abbreviation: String,
    /// Name shown in the language dropdown, in that language.
    pub name: String,
}

impl LanguageOption {
    pub fn new(abbreviation: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Menu catalog JSON file; builtin catalog when absent.
    pub catalog: Option<PathBuf>,
    /// Resource table JSON file; builtin resources when absent.
    pub resources: Option<PathBuf>,
    pub style: MenuStyle,
    /// Supported languages; the first one is the default.
    pub languages: Vec<LanguageOption>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            resources: None,
            style: MenuStyle::default(),
            languages: vec![
                LanguageOption::new("en-GB", "English"),
                LanguageOption::new("lt-LT", "Lietuvių"),
            ],
        }
    }
}

impl SidebarConfig {
    /// Parse a config document. The top level must be a JSON object.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ConfigError::parse(format!("sidebar config: {e}")))?;
        if !value.is_object() {
            return Err(ConfigError::parse("sidebar config: expected a JSON object"));
        }
        serde_json::from_value(value).map_err(|e| ConfigError::parse(format!("sidebar config: {e}")))
    }

    /// Load from a file. Relative `catalog`/`resources` paths are taken
    /// relative to the file's directory.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::io(format!("{}: {e}", path.display())))?;
        let mut config = Self::from_json(&json)?;

        if let Some(dir) = path.parent() {
            config.catalog = config.catalog.map(|p| dir.join(p));
            config.resources = config.resources.map(|p| dir.join(p));
        }
        Ok(config)
    }

    /// Load from the file named by `NAVKIT_CONFIG`, or use defaults when unset.
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                info!(path = %path.display(), "loading sidebar config");
                Self::from_path(&path)
            }
            None => {
                info!("{CONFIG_ENV} not set; using builtin sidebar config");
                Ok(Self::default())
            }
        }
    }

    pub fn default_language(&self) -> Option<&str> {
        self.languages.first().map(|l| l.abbreviation.as_str())
    }
}
