//! Object graph construction.
//!
//! Everything a [`Sidebar`] depends on is built here, explicitly, from a
//! [`SidebarConfig`] and the application's authorization policy.

use std::sync::Arc;

use tracing::info;

use navkit_auth::RouteAuthorization;

use crate::{
    MenuAuthorizer, MenuCatalog, MenuResult, ResourceTable, RouteTable, Sidebar, SidebarConfig,
};

/// Routes linked from the page header rather than the menu.
pub const HEADER_ROUTES: [(Option<&str>, &str, &str); 2] =
    [(None, "Profile", "Edit"), (None, "Account", "Logout")];

/// Build a [`Sidebar`] from configuration.
///
/// Fails if the catalog or resource files are missing or invalid; callers
/// should treat that as fatal at startup.
pub fn build_sidebar(
    config: &SidebarConfig,
    authorization: Arc<dyn RouteAuthorization + Send + Sync>,
) -> MenuResult<Sidebar> {
    let catalog = match &config.catalog {
        Some(path) => MenuCatalog::from_path(path)?,
        None => MenuCatalog::builtin(),
    };
    let mut resources = match &config.resources {
        Some(path) => ResourceTable::from_path(path)?,
        None => ResourceTable::builtin(),
    };
    // URLs and titles must agree on which language is unprefixed.
    if let Some(language) = config.default_language() {
        resources = resources.with_default_language(language);
    }

    let routes = RouteTable::new(config.default_language())
        .register_all(catalog.routes())
        .register_all(HEADER_ROUTES);

    info!(
        menus = catalog.len(),
        routes = routes.len(),
        languages = config.languages.len(),
        "sidebar assembled"
    );

    let localizer = Arc::new(resources);
    let authorizer = MenuAuthorizer::new(Arc::new(catalog), authorization, localizer.clone());

    Ok(Sidebar::new(
        authorizer,
        Arc::new(routes),
        localizer,
        config.style.clone(),
        config.languages.clone(),
    ))
}
