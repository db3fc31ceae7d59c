//! `navkit-auth` — route-level authorization boundary.
//!
//! This crate is intentionally decoupled from HTML and storage: it answers
//! "may this principal open this page?" and nothing else.

pub mod authorize;
pub mod permissions;
pub mod principal;
pub mod roles;

pub use authorize::{
    AuthorizationExplanation, AuthzError, RolePolicy, RouteAuthorization, explain_authorization,
};
pub use permissions::Permission;
pub use principal::{Principal, PrincipalId};
pub use roles::Role;

use std::borrow::Cow;

/// Role and permission names compare case-insensitively; store them lower-cased.
fn lowercase(name: Cow<'static, str>) -> Cow<'static, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        name
    }
}
