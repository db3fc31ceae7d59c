use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{Permission, Principal, PrincipalId, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// The policy source could not answer (identity store down, etc).
    ///
    /// Callers must not treat this as "denied".
    #[error("authorization unavailable: {0}")]
    Unavailable(String),

    /// A strict policy met a role it has no definition for.
    #[error("unknown role '{0}'")]
    UnknownRole(String),
}

impl AuthzError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Page-level authorization capability.
///
/// Answers whether `principal` may open `(area, controller, action)`.
/// Errors mean the question could not be answered and must be propagated.
pub trait RouteAuthorization {
    fn is_authorized(
        &self,
        principal: &Principal,
        area: Option<&str>,
        controller: &str,
        action: &str,
    ) -> Result<bool, AuthzError>;
}

impl<F> RouteAuthorization for F
where
    F: Fn(&Principal, Option<&str>, &str, &str) -> Result<bool, AuthzError>,
{
    fn is_authorized(
        &self,
        principal: &Principal,
        area: Option<&str>,
        controller: &str,
        action: &str,
    ) -> Result<bool, AuthzError> {
        self(principal, area, controller, action)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Role policy
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory role → permission mapping.
///
/// Role and permission names are case-insensitive.
///
/// ```json
/// { "strict": false, "roles": { "admin": ["*"], "user": ["home.index"] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePolicy {
    /// Fail on roles without a definition instead of ignoring them.
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub roles: HashMap<Role, Vec<Permission>>,
}

impl RolePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Grant `permissions` to `role` (appends to existing grants).
    pub fn grant(mut self, role: Role, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.roles.entry(role).or_default().extend(permissions);
        self
    }

    /// Permissions granted to a single role.
    pub fn role_permissions(&self, role: &Role) -> Result<Vec<Permission>, AuthzError> {
        match self.roles.get(role) {
            Some(perms) => Ok(perms.clone()),
            None if self.strict => Err(AuthzError::UnknownRole(role.as_str().to_string())),
            None => {
                warn!(role = %role, "role has no policy entry; granting nothing");
                Ok(Vec::new())
            }
        }
    }

    /// Role-derived plus explicit permissions of `principal`, sorted.
    pub fn effective_permissions(&self, principal: &Principal) -> Result<BTreeSet<String>, AuthzError> {
        let mut effective = BTreeSet::new();
        for role in &principal.roles {
            for perm in self.role_permissions(role)? {
                effective.insert(perm.as_str().to_string());
            }
        }
        for perm in &principal.permissions {
            effective.insert(perm.as_str().to_string());
        }
        Ok(effective)
    }

    /// Check a single permission.
    pub fn authorize(&self, principal: &Principal, required: &Permission) -> Result<bool, AuthzError> {
        let effective = self.effective_permissions(principal)?;
        Ok(effective.contains("*") || effective.contains(required.as_str()))
    }
}

impl RouteAuthorization for RolePolicy {
    fn is_authorized(
        &self,
        principal: &Principal,
        area: Option<&str>,
        controller: &str,
        action: &str,
    ) -> Result<bool, AuthzError> {
        self.authorize(principal, &Permission::for_route(area, controller, action))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Authorization Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of an authorization decision.
///
/// Answers "why can't I see this page in my menu?" without reading code.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationExplanation {
    /// The permission that was being checked.
    pub required_permission: String,

    /// Whether the authorization was granted.
    pub granted: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    pub principal_id: Option<PrincipalId>,
    pub roles: Vec<String>,
    pub effective_permissions: Vec<String>,

    /// If denied, what would grant access.
    pub suggestions: Vec<String>,
}

/// Explain why `principal` is (or is not) granted `required` by `policy`.
pub fn explain_authorization(
    principal: &Principal,
    required: &Permission,
    policy: &RolePolicy,
) -> Result<AuthorizationExplanation, AuthzError> {
    let required_str = required.as_str();
    let effective = policy.effective_permissions(principal)?;
    let has_wildcard = effective.contains("*");
    let has_required = effective.contains(required_str);
    let roles: Vec<String> = principal.roles.iter().map(|r| r.as_str().to_string()).collect();

    let (granted, reason, suggestions) = if has_wildcard {
        (true, "Principal has wildcard permission '*'".to_string(), Vec::new())
    } else if has_required {
        (
            true,
            format!("Principal has permission '{}'", required_str),
            Vec::new(),
        )
    } else {
        // Roles the policy knows that would grant the page.
        let mut granting_roles: Vec<&str> = policy
            .roles
            .iter()
            .filter(|(_, perms)| perms.iter().any(|p| p.is_wildcard() || p == required))
            .map(|(role, _)| role.as_str())
            .collect();
        granting_roles.sort_unstable();

        let mut suggestions = Vec::new();
        if !granting_roles.is_empty() {
            suggestions.push(format!("Assign one of the roles: {}", granting_roles.join(", ")));
        }
        suggestions.push(format!("Grant the '{}' permission directly to the principal", required_str));

        let reason = if principal.is_authenticated() {
            format!("Principal does not have permission '{}'", required_str)
        } else {
            format!("Anonymous principal does not have permission '{}'", required_str)
        };
        (false, reason, suggestions)
    };

    Ok(AuthorizationExplanation {
        required_permission: required_str.to_string(),
        granted,
        reason,
        principal_id: principal.principal_id,
        roles,
        effective_permissions: effective.into_iter().collect(),
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RolePolicy {
        RolePolicy::new()
            .grant(Role::new("admin"), [Permission::wildcard()])
            .grant(
                Role::new("user"),
                [
                    Permission::new("home.index"),
                    Permission::new("profile.edit"),
                ],
            )
    }

    fn user() -> Principal {
        Principal::authenticated(PrincipalId::new(), vec![Role::new("user")])
    }

    #[test]
    fn wildcard_role_grants_every_route() {
        let admin = Principal::authenticated(PrincipalId::new(), vec![Role::new("admin")]);
        assert!(policy().is_authorized(&admin, Some("Administration"), "Roles", "Index").unwrap());
    }

    #[test]
    fn role_permission_grants_matching_route_only() {
        let p = policy();
        assert!(p.is_authorized(&user(), None, "Home", "Index").unwrap());
        assert!(!p.is_authorized(&user(), Some("Administration"), "Roles", "Index").unwrap());
    }

    #[test]
    fn explicit_permission_is_honored() {
        let principal = user().with_permission(Permission::new("administration.roles.index"));
        assert!(policy().is_authorized(&principal, Some("Administration"), "Roles", "Index").unwrap());
    }

    #[test]
    fn anonymous_is_denied() {
        assert!(!policy().is_authorized(&Principal::anonymous(), None, "Home", "Index").unwrap());
    }

    #[test]
    fn lenient_policy_ignores_unknown_roles() {
        let principal = Principal::authenticated(PrincipalId::new(), vec![Role::new("ghost")]);
        assert!(!policy().is_authorized(&principal, None, "Home", "Index").unwrap());
    }

    #[test]
    fn strict_policy_rejects_unknown_roles() {
        let principal = Principal::authenticated(PrincipalId::new(), vec![Role::new("ghost")]);
        let err = policy().strict().is_authorized(&principal, None, "Home", "Index").unwrap_err();
        assert_eq!(err, AuthzError::UnknownRole("ghost".to_string()));
    }

    #[test]
    fn closure_errors_propagate() {
        let failing = |_: &Principal, _: Option<&str>, _: &str, _: &str| -> Result<bool, AuthzError> {
            Err(AuthzError::unavailable("identity store unreachable"))
        };
        let err = failing.is_authorized(&user(), None, "Home", "Index").unwrap_err();
        assert!(matches!(err, AuthzError::Unavailable(_)));
    }

    #[test]
    fn policy_deserializes_from_json() {
        let json = r#"{ "roles": { "admin": ["*"], "user": ["home.index"] } }"#;
        let policy: RolePolicy = serde_json::from_str(json).unwrap();
        assert!(!policy.strict);
        assert_eq!(policy.roles.len(), 2);
        assert!(policy.is_authorized(&user(), None, "home", "index").unwrap());
    }

    #[test]
    fn mixed_case_grants_and_roles_match() {
        let json = r#"{ "strict": true, "roles": { "User": ["Home.Index"] } }"#;
        let policy: RolePolicy = serde_json::from_str(json).unwrap();

        let typed = Principal::authenticated(PrincipalId::new(), vec![Role::new("USER")]);
        assert!(policy.is_authorized(&typed, None, "Home", "Index").unwrap());
        assert!(policy.is_authorized(&user(), None, "home", "INDEX").unwrap());
    }

    #[test]
    fn explanation_for_denied_route_suggests_roles() {
        let required = Permission::for_route(Some("Administration"), "Roles", "Index");
        let explanation = explain_authorization(&user(), &required, &policy()).unwrap();

        assert!(!explanation.granted);
        assert_eq!(explanation.required_permission, "administration.roles.index");
        assert_eq!(explanation.effective_permissions, vec!["home.index", "profile.edit"]);
        assert!(explanation.suggestions[0].contains("admin"));
    }

    #[test]
    fn explanation_for_granted_route() {
        let required = Permission::for_route(None, "Home", "Index");
        let explanation = explain_authorization(&user(), &required, &policy()).unwrap();

        assert!(explanation.granted);
        assert!(explanation.suggestions.is_empty());
    }
}
