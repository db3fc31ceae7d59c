//! Render the sidebar layout for one principal/route and print it.
//!
//! ```text
//! navkit-preview <controller> <action> [area]
//! ```
//!
//! Environment: `NAVKIT_CONFIG` (sidebar config file), `NAVKIT_POLICY` (role
//! policy file), `NAVKIT_ROLES` (comma-separated roles of the principal, none
//! means anonymous) and `NAVKIT_LANGUAGE`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};

use navkit_auth::{
    AuthorizationExplanation, Permission, Principal, PrincipalId, Role, RolePolicy,
    explain_authorization,
};
use navkit_core::Route;
use navkit_menu::{MenuCatalog, SidebarConfig};
use navkit_menu::assembly::build_sidebar;

fn main() -> anyhow::Result<()> {
    navkit_observability::init();

    let route = route_from_args(std::env::args().skip(1).collect())?;
    let principal = principal_from_env();
    let policy = Arc::new(policy_from_env()?);

    let config = SidebarConfig::from_env().context("loading sidebar config")?;
    let sidebar = build_sidebar(&config, policy.clone()).context("assembling sidebar")?;

    for explanation in denied_routes(&policy, &principal, sidebar.authorizer().catalog())? {
        tracing::debug!(
            permission = %explanation.required_permission,
            reason = %explanation.reason,
            suggestions = ?explanation.suggestions,
            "menu entry hidden"
        );
    }

    let layout = sidebar
        .render_layout(&principal, &route)
        .with_context(|| format!("rendering sidebar for {route}"))?;

    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

fn route_from_args(args: Vec<String>) -> anyhow::Result<Route> {
    let (controller, action, area) = match args.as_slice() {
        [controller, action] => (controller, action, None),
        [controller, action, area] => (controller, action, Some(area.as_str())),
        _ => bail!("usage: navkit-preview <controller> <action> [area]"),
    };

    let language = std::env::var("NAVKIT_LANGUAGE").ok();
    Ok(Route::new(area, controller.as_str(), action.as_str()).with_language(language.as_deref()))
}

fn principal_from_env() -> Principal {
    let roles: Vec<Role> = std::env::var("NAVKIT_ROLES")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| Role::new(r.to_string()))
        .collect();

    if roles.is_empty() {
        Principal::anonymous()
    } else {
        Principal::authenticated(PrincipalId::new(), roles)
    }
}

/// Why each catalog link the principal cannot open is hidden.
fn denied_routes(
    policy: &RolePolicy,
    principal: &Principal,
    catalog: &MenuCatalog,
) -> anyhow::Result<Vec<AuthorizationExplanation>> {
    let mut denied = Vec::new();
    for (area, controller, action) in catalog.routes() {
        let required = Permission::for_route(area, controller, action);
        let explanation = explain_authorization(principal, &required, policy)?;
        if !explanation.granted {
            denied.push(explanation);
        }
    }
    Ok(denied)
}

fn policy_from_env() -> anyhow::Result<RolePolicy> {
    let Some(path) = std::env::var_os("NAVKIT_POLICY").map(PathBuf::from) else {
        tracing::warn!("NAVKIT_POLICY not set; using dev policy (admin = *)");
        return Ok(RolePolicy::new().grant(Role::new("admin"), [Permission::wildcard()]));
    };

    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading policy {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing policy {}", path.display()))
}
