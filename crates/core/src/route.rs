//! The route of an in-flight request.
//!
//! Routes are compared by name only. Controller and action names compare
//! ASCII case-insensitively; an absent area only equals another absent area.

use serde::Serialize;

use crate::value_object::ValueObject;

/// Identity of the page being served: `(controller, action, area)` plus the
/// language segment the request was made in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    language: Option<String>,
    area: Option<String>,
    controller: String,
    action: String,
}

impl ValueObject for Route {}

impl Route {
    /// Create a route without a language segment.
    ///
    /// Empty or whitespace-only areas are stored as "no area".
    pub fn new(area: Option<&str>, controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            language: None,
            area: normalize_segment(area),
            controller: controller.into(),
            action: action.into(),
        }
    }

    /// Same route, served in `language` (e.g. `"lt-LT"`).
    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = normalize_segment(language);
        self
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Whether this route targets `(controller, action, area)`.
    ///
    /// The language segment does not take part in the comparison.
    pub fn matches(&self, area: Option<&str>, controller: &str, action: &str) -> bool {
        names_equal(&self.controller, controller)
            && names_equal(&self.action, action)
            && areas_equal(self.area(), area)
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.area {
            Some(area) => write!(f, "{}/{}/{}", area, self.controller, self.action),
            None => write!(f, "{}/{}", self.controller, self.action),
        }
    }
}

/// Controller/action name comparison (ASCII case-insensitive).
pub fn names_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Area comparison.
///
/// Both absent, or both present and equal ignoring case. Nested areas are
/// compared as whole strings: `"Admin/Users"` never equals `"Admin"`.
pub fn areas_equal(a: Option<&str>, b: Option<&str>) -> bool {
    match (normalize(a), normalize(b)) {
        (None, None) => true,
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

/// Treat empty or whitespace-only segments as absent.
pub fn normalize_segment(segment: Option<&str>) -> Option<String> {
    normalize(segment).map(str::to_string)
}

fn normalize(segment: Option<&str>) -> Option<&str> {
    segment.map(str::trim).filter(|s| !s.is_empty())
}
