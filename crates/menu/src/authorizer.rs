//! Per-request filtering and annotation of the catalog.

use std::sync::Arc;

use tracing::debug;

use navkit_auth::{AuthzError, Principal, RouteAuthorization};
use navkit_core::Route;

use crate::{Localizer, Menu, MenuCatalog};

/// Derives the authorized, annotated forest for one request.
///
/// The catalog is never modified: every call builds a fresh copy in which
/// - links the principal may not open are dropped,
/// - groups left without children are dropped,
/// - the entry matching the current route is `is_active`,
/// - its ancestors are `has_active_child`,
/// - titles are localized in the route's language.
#[derive(Clone)]
pub struct MenuAuthorizer {
    catalog: Arc<MenuCatalog>,
    authorization: Arc<dyn RouteAuthorization + Send + Sync>,
    localizer: Arc<dyn Localizer + Send + Sync>,
}

impl MenuAuthorizer {
    pub fn new(
        catalog: Arc<MenuCatalog>,
        authorization: Arc<dyn RouteAuthorization + Send + Sync>,
        localizer: Arc<dyn Localizer + Send + Sync>,
    ) -> Self {
        Self {
            catalog,
            authorization,
            localizer,
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// Authorized forest for `principal` on `route`, in catalog order.
    ///
    /// Authorization errors propagate; they are never read as "denied".
    pub fn authorized_menus(&self, principal: &Principal, route: &Route) -> Result<Vec<Menu>, AuthzError> {
        let menus = self.filter(self.catalog.all_menus(), principal, route)?;
        debug!(
            route = %route,
            authenticated = principal.is_authenticated(),
            roots = menus.len(),
            "authorized menus"
        );
        Ok(menus)
    }

    fn filter(&self, menus: &[Menu], principal: &Principal, route: &Route) -> Result<Vec<Menu>, AuthzError> {
        let mut authorized = Vec::with_capacity(menus.len());
        for menu in menus {
            if let Some(menu) = self.authorize(menu, principal, route)? {
                authorized.push(menu);
            }
        }
        Ok(authorized)
    }

    fn authorize(&self, menu: &Menu, principal: &Principal, route: &Route) -> Result<Option<Menu>, AuthzError> {
        let area = menu.area.as_deref();

        let is_active = match menu.action.as_deref() {
            Some(action) => {
                if !self.authorization.is_authorized(principal, area, &menu.controller, action)? {
                    return Ok(None);
                }
                route.matches(area, &menu.controller, action)
            }
            None => false,
        };

        let submenus = self.filter(&menu.submenus, principal, route)?;
        if menu.is_group() && submenus.is_empty() {
            return Ok(None);
        }

        let has_active_child = submenus.iter().any(|m| m.is_active || m.has_active_child);

        Ok(Some(Menu {
            title: self.localizer.localize(route.language(), &menu.title),
            icon_class: menu.icon_class.clone(),
            area: menu.area.clone(),
            controller: menu.controller.clone(),
            action: menu.action.clone(),
            submenus,
            is_active,
            has_active_child,
        }))
    }
}

impl core::fmt::Debug for MenuAuthorizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuAuthorizer")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}
