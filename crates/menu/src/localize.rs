//! Display text lookup.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use navkit_core::{ConfigError, ConfigResult};

/// Resolves a resource key to display text in a language.
///
/// `language` is the language segment of the current route; `None` means the
/// default language. Lookups never fail: unknown keys fall back to the key.
pub trait Localizer {
    fn localize(&self, language: Option<&str>, key: &str) -> String;
}

impl<F> Localizer for F
where
    F: Fn(Option<&str>, &str) -> String,
{
    fn localize(&self, language: Option<&str>, key: &str) -> String {
        self(language, key)
    }
}

/// Per-language key → text tables.
///
/// ```json
/// { "default_language": "en-GB", "resources": { "en-GB": { "Home": "Home" } } }
/// ```
///
/// Language codes are case-insensitive and stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawResourceTable")]
pub struct ResourceTable {
    default_language: String,
    resources: HashMap<String, HashMap<String, String>>,
}

#[derive(Deserialize)]
struct RawResourceTable {
    default_language: String,
    #[serde(default)]
    resources: HashMap<String, HashMap<String, String>>,
}

impl From<RawResourceTable> for ResourceTable {
    fn from(raw: RawResourceTable) -> Self {
        // Sorted so that tables differing only in case merge the same way every time.
        let mut languages: Vec<_> = raw.resources.into_iter().collect();
        languages.sort_by(|a, b| a.0.cmp(&b.0));

        let mut table = Self::new(raw.default_language);
        for (language, texts) in languages {
            table
                .resources
                .entry(language.to_ascii_lowercase())
                .or_default()
                .extend(texts);
        }
        table
    }
}

impl ResourceTable {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into().to_ascii_lowercase(),
            resources: HashMap::new(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Same tables, falling back to `language` instead.
    pub fn with_default_language(mut self, language: &str) -> Self {
        self.default_language = language.to_ascii_lowercase();
        self
    }

    /// Add or replace `key` in `language`.
    pub fn insert(mut self, language: &str, key: &str, text: &str) -> Self {
        self.resources
            .entry(language.to_ascii_lowercase())
            .or_default()
            .insert(key.to_string(), text.to_string());
        self
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::parse(format!("resources: {e}")))
    }

    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::io(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// English and Lithuanian titles for the builtin catalog and header.
    pub fn builtin() -> Self {
        let english = [
            ("Home", "Home"),
            ("Administration", "Administration"),
            ("Accounts", "Accounts"),
            ("Roles", "Roles"),
            ("Profile", "Profile"),
            ("Logout", "Logout"),
            ("Language", "Language"),
            ("Search", "Search"),
        ];
        let lithuanian = [
            ("Home", "Pradžia"),
            ("Administration", "Administravimas"),
            ("Accounts", "Paskyros"),
            ("Roles", "Rolės"),
            ("Profile", "Profilis"),
            ("Logout", "Atsijungti"),
            ("Language", "Kalba"),
            ("Search", "Paieška"),
        ];

        let mut table = Self::new("en-GB");
        for (key, text) in english {
            table = table.insert("en-GB", key, text);
        }
        for (key, text) in lithuanian {
            table = table.insert("lt-LT", key, text);
        }
        table
    }

    fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.resources
            .get(&language.to_ascii_lowercase())
            .and_then(|texts| texts.get(key))
            .map(String::as_str)
    }
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Localizer for ResourceTable {
    fn localize(&self, language: Option<&str>, key: &str) -> String {
        let found = language
            .and_then(|lang| self.lookup(lang, key))
            .or_else(|| self.lookup(&self.default_language, key));

        match found {
            Some(text) => text.to_string(),
            None => {
                debug!(key, language = language.unwrap_or(""), "missing resource; using key");
                key.to_string()
            }
        }
    }
}
