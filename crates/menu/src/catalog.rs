//! The static set of every configured navigation entry.

use std::path::Path;

use tracing::debug;

use navkit_core::{ConfigError, ConfigResult, normalize_segment};

use crate::Menu;

/// Every configured menu entry, unauthorized and unannotated.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    menus: Vec<Menu>,
}

impl MenuCatalog {
    /// Validate and wrap `menus`.
    ///
    /// Fails on the first entry that is a group without submenus, a link
    /// without a controller, or has no title. Empty areas/actions are
    /// normalized to `None` first.
    pub fn new(menus: Vec<Menu>) -> ConfigResult<Self> {
        let menus = menus
            .into_iter()
            .map(normalize)
            .collect::<ConfigResult<Vec<_>>>()?;

        debug!(roots = menus.len(), "menu catalog loaded");
        Ok(Self { menus })
    }

    /// Parse a JSON array of entries.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let menus: Vec<Menu> =
            serde_json::from_str(json).map_err(|e| ConfigError::parse(format!("menu catalog: {e}")))?;
        Self::new(menus)
    }

    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::io(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// The application's default navigation.
    pub fn builtin() -> Self {
        let administration = Some("Administration");
        Self {
            menus: vec![
                Menu::leaf("Home", "fa fa-home", None, "Home", "Index"),
                Menu::group(
                    "Administration",
                    "fa fa-users",
                    administration,
                    vec![
                        Menu::leaf("Accounts", "fa fa-user", administration, "Accounts", "Index"),
                        Menu::leaf("Roles", "fa fa-male", administration, "Roles", "Index"),
                    ],
                ),
            ],
        }
    }

    pub fn all_menus(&self) -> &[Menu] {
        &self.menus
    }

    /// Every `(area, controller, action)` a configured entry links to, in
    /// catalog pre-order.
    pub fn routes(&self) -> impl Iterator<Item = (Option<&str>, &str, &str)> {
        self.menus.iter().flat_map(Menu::iter).filter_map(|menu| {
            menu.action
                .as_deref()
                .map(|action| (menu.area.as_deref(), menu.controller.as_str(), action))
        })
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(mut menu: Menu) -> ConfigResult<Menu> {
    if menu.title.trim().is_empty() {
        return Err(ConfigError::MissingTitle);
    }

    menu.area = normalize_segment(menu.area.as_deref());
    menu.action = normalize_segment(menu.action.as_deref());

    if menu.action.is_none() && menu.submenus.is_empty() {
        return Err(ConfigError::empty_group(&menu.title));
    }
    if menu.action.is_some() && menu.controller.trim().is_empty() {
        return Err(ConfigError::missing_controller(&menu.title));
    }

    menu.submenus = menu
        .submenus
        .into_iter()
        .map(normalize)
        .collect::<ConfigResult<Vec<_>>>()?;
    Ok(menu)
}
