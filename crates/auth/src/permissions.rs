use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};

use crate::lowercase;

/// Permission identifier.
///
/// Permissions are modeled as opaque strings. Page permissions are derived from
/// the route they guard (see [`Permission::for_route`]), e.g.
/// `"administration.roles.index"`. The wildcard `"*"` grants every page.
/// Names are stored lower-cased, so `"Home.Index"` and `"home.index"` are
/// the same permission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(lowercase(name.into()))
    }

    pub fn wildcard() -> Self {
        Self::new("*")
    }

    /// Permission guarding `(area, controller, action)`.
    ///
    /// Lower-cased and dot-separated; the area segment is left out when absent.
    pub fn for_route(area: Option<&str>, controller: &str, action: &str) -> Self {
        let name = match area.map(str::trim).filter(|a| !a.is_empty()) {
            Some(area) => format!("{area}.{controller}.{action}"),
            None => format!("{controller}.{action}"),
        };
        Self::new(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_permission_is_lowercase_and_dotted() {
        let p = Permission::for_route(Some("Administration"), "Roles", "Index");
        assert_eq!(p.as_str(), "administration.roles.index");
    }

    #[test]
    fn route_permission_without_area() {
        assert_eq!(Permission::for_route(None, "Home", "Index").as_str(), "home.index");
        assert_eq!(Permission::for_route(Some(""), "Home", "Index").as_str(), "home.index");
    }

    #[test]
    fn names_are_lowercased() {
        assert_eq!(Permission::new("Home.Index"), Permission::for_route(None, "Home", "Index"));
        let parsed: Permission = serde_json::from_str(r#""Administration.Roles.Index""#).unwrap();
        assert_eq!(parsed.as_str(), "administration.roles.index");
    }

    #[test]
    fn wildcard() {
        assert!(Permission::wildcard().is_wildcard());
        assert!(!Permission::new("home.index").is_wildcard());
    }
}
