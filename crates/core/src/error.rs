//! Error model for configuration and route resolution.

use thiserror::Error;

/// Result type used while loading static configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Static configuration is invalid.
///
/// These are detected while loading (before any request is served) and are
/// meant to stop the application from starting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A group entry (no action) was configured without submenus.
    #[error("menu group '{title}' has no submenus")]
    EmptyGroup { title: String },

    /// A link entry (with an action) was configured without a controller.
    #[error("menu entry '{title}' has an action but no controller")]
    MissingController { title: String },

    /// A menu entry was configured without a title key.
    #[error("menu entry without a title")]
    MissingTitle,

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(String),

    /// A configuration file could not be read.
    #[error("cannot read configuration: {0}")]
    Io(String),
}

impl ConfigError {
    pub fn empty_group(title: impl Into<String>) -> Self {
        Self::EmptyGroup { title: title.into() }
    }

    pub fn missing_controller(title: impl Into<String>) -> Self {
        Self::MissingController { title: title.into() }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

/// A (controller, action, area) triple has no URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route for area '{}', controller '{controller}', action '{action}'", area.as_deref().unwrap_or(""))]
    Unresolved {
        area: Option<String>,
        controller: String,
        action: String,
    },
}

impl RouteError {
    pub fn unresolved(area: Option<&str>, controller: &str, action: &str) -> Self {
        Self::Unresolved {
            area: area.map(str::to_string),
            controller: controller.to_string(),
            action: action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_message_names_the_triple() {
        let err = RouteError::unresolved(Some("Administration"), "Roles", "Index");
        assert_eq!(
            err.to_string(),
            "no route for area 'Administration', controller 'Roles', action 'Index'"
        );
    }

    #[test]
    fn unresolved_message_without_area() {
        let err = RouteError::unresolved(None, "Home", "Index");
        assert_eq!(err.to_string(), "no route for area '', controller 'Home', action 'Index'");
    }

    #[test]
    fn empty_group_message() {
        assert_eq!(
            ConfigError::empty_group("Administration").to_string(),
            "menu group 'Administration' has no submenus"
        );
    }
}
