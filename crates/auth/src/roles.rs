use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};

use crate::lowercase;

/// Role of a principal, e.g. `"admin"`.
///
/// What a role may open is decided by a [`crate::RolePolicy`] (or any other
/// [`crate::RouteAuthorization`]); this type only names it. Names are stored
/// lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(lowercase(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive name check, for roles typed by people (env, CLI).
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
