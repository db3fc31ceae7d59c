//! Authorized forest → nested list markup.

use serde::{Deserialize, Serialize};

use navkit_core::RouteError;

use crate::{Menu, Tag, UrlResolver};

/// CSS tokens written by [`MenuRenderer`].
///
/// Each field may hold several whitespace-separated classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStyle {
    /// Every `<li>`.
    pub item: String,
    /// Entries with submenus.
    pub group: String,
    /// Ancestors of the active entry.
    pub has_active_child: String,
    /// The active entry.
    pub active: String,
    /// Written next to `active`.
    pub active_hover: String,
    /// Trailing icon of entries without a link.
    pub expand_icon: String,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            item: "menu".to_string(),
            group: "submenu".to_string(),
            has_active_child: "has-active-child open".to_string(),
            active: "active".to_string(),
            active_hover: "active-hovering".to_string(),
            expand_icon: "arrow fa fa-chevron-right".to_string(),
        }
    }
}

/// Serializes an authorized forest to `<li>` markup.
///
/// Pure: the forest is only read, and the same input always produces the same
/// string.
#[derive(Clone, Copy)]
pub struct MenuRenderer<'a> {
    resolver: &'a dyn UrlResolver,
    style: &'a MenuStyle,
    language: Option<&'a str>,
}

impl<'a> MenuRenderer<'a> {
    pub fn new(resolver: &'a dyn UrlResolver, style: &'a MenuStyle) -> Self {
        Self {
            resolver,
            style,
            language: None,
        }
    }

    /// Resolve links in `language` instead of the default one.
    pub fn in_language(mut self, language: Option<&'a str>) -> Self {
        self.language = language;
        self
    }

    /// Render `menus` depth-first, siblings concatenated in order.
    ///
    /// Fails on the first link whose route cannot be resolved.
    pub fn render(&self, menus: &[Menu]) -> Result<String, RouteError> {
        let mut html = String::new();
        for menu in menus {
            html.push_str(&self.render_menu(menu)?);
        }
        Ok(html)
    }

    fn render_menu(&self, menu: &Menu) -> Result<String, RouteError> {
        let mut item = Tag::new("li").class(&self.style.item);
        if menu.has_submenus() {
            item = item.class(&self.style.group);
        }
        if menu.has_active_child {
            item = item.class(&self.style.has_active_child);
        }
        if menu.is_active {
            item = item.class(&self.style.active).class(&self.style.active_hover);
        }

        item = item.html(&self.render_action(menu)?);
        if menu.has_submenus() {
            let submenus = Tag::new("ul").html(&self.render(&menu.submenus)?);
            item = item.html(&submenus.to_string());
        }

        Ok(item.to_string())
    }

    fn render_action(&self, menu: &Menu) -> Result<String, RouteError> {
        let icon = Tag::new("i").class(&menu.icon_class).to_string();
        let title = Tag::new("span").text(&menu.title).to_string();

        let link = match menu.action.as_deref() {
            Some(action) => {
                let href = self
                    .resolver
                    .resolve(self.language, menu.area.as_deref(), &menu.controller, action)?;
                Tag::new("a").attr("href", href).html(&icon).html(&title)
            }
            None => {
                let expand = Tag::new("i").class(&self.style.expand_icon).to_string();
                Tag::new("a").html(&icon).html(&title).html(&expand)
            }
        };

        Ok(link.to_string())
    }
}

impl core::fmt::Debug for MenuRenderer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuRenderer")
            .field("style", self.style)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
