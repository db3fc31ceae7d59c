//! Route → URL resolution.

use std::collections::HashSet;

use navkit_core::{Route, RouteError, normalize_segment};

/// Builds URLs for configured routes.
pub trait UrlResolver {
    /// URL of `area/controller/action` in `language`.
    ///
    /// Fails when the triple is not a known route.
    fn resolve(
        &self,
        language: Option<&str>,
        area: Option<&str>,
        controller: &str,
        action: &str,
    ) -> Result<String, RouteError>;

    /// URL of the route currently being served, in another language.
    ///
    /// The in-flight route exists by definition, so this cannot fail.
    fn resolve_current(&self, route: &Route, language: Option<&str>) -> String;
}

/// Registry of the routes the application serves.
///
/// Paths look like `/{language}/{area}/{controller}/{action}`. The language
/// segment is left out for the default language; the area segment when the
/// route has none. Segments are percent-encoded. Lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    default_language: Option<String>,
    routes: HashSet<RouteKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RouteKey {
    area: Option<String>,
    controller: String,
    action: String,
}

impl RouteKey {
    fn new(area: Option<&str>, controller: &str, action: &str) -> Self {
        Self {
            area: normalize_segment(area).map(|a| a.to_ascii_lowercase()),
            controller: controller.to_ascii_lowercase(),
            action: action.to_ascii_lowercase(),
        }
    }
}

impl RouteTable {
    pub fn new(default_language: Option<&str>) -> Self {
        Self {
            default_language: normalize_segment(default_language),
            routes: HashSet::new(),
        }
    }

    pub fn register(mut self, area: Option<&str>, controller: &str, action: &str) -> Self {
        self.routes.insert(RouteKey::new(area, controller, action));
        self
    }

    /// Register every `(area, controller, action)` from `routes`.
    pub fn register_all<'a>(
        mut self,
        routes: impl IntoIterator<Item = (Option<&'a str>, &'a str, &'a str)>,
    ) -> Self {
        for (area, controller, action) in routes {
            self.routes.insert(RouteKey::new(area, controller, action));
        }
        self
    }

    pub fn contains(&self, area: Option<&str>, controller: &str, action: &str) -> bool {
        self.routes.contains(&RouteKey::new(area, controller, action))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn is_default_language(&self, language: &str) -> bool {
        self.default_language
            .as_deref()
            .is_some_and(|default| default.eq_ignore_ascii_case(language))
    }

    fn path(&self, language: Option<&str>, area: Option<&str>, controller: &str, action: &str) -> String {
        let language = normalize_segment(language).filter(|l| !self.is_default_language(l));
        let area = normalize_segment(area);

        let mut path = String::new();
        for segment in [language.as_deref(), area.as_deref(), Some(controller), Some(action)]
            .into_iter()
            .flatten()
        {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }
        path
    }
}

impl UrlResolver for RouteTable {
    fn resolve(
        &self,
        language: Option<&str>,
        area: Option<&str>,
        controller: &str,
        action: &str,
    ) -> Result<String, RouteError> {
        if !self.contains(area, controller, action) {
            return Err(RouteError::unresolved(area, controller, action));
        }
        Ok(self.path(language, area, controller, action))
    }

    fn resolve_current(&self, route: &Route, language: Option<&str>) -> String {
        self.path(language, route.area(), route.controller(), route.action())
    }
}
