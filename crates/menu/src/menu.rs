use serde::{Deserialize, Serialize};

/// A navigation entry and its children.
///
/// In the catalog `title` is a resource key and both flags are false. In an
/// authorized forest `title` is the localized text and the flags describe the
/// current request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub title: String,
    #[serde(default)]
    pub icon_class: String,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub controller: String,
    /// `None` for a pure group that only expands its submenus.
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub submenus: Vec<Menu>,
    #[serde(default, skip_deserializing)]
    pub is_active: bool,
    #[serde(default, skip_deserializing)]
    pub has_active_child: bool,
}

impl Menu {
    /// Entry linking to `area/controller/action`.
    pub fn leaf(
        title: impl Into<String>,
        icon_class: impl Into<String>,
        area: Option<&str>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            icon_class: icon_class.into(),
            area: area.map(str::to_string),
            controller: controller.into(),
            action: Some(action.into()),
            submenus: Vec::new(),
            is_active: false,
            has_active_child: false,
        }
    }

    /// Entry without a target of its own.
    pub fn group(
        title: impl Into<String>,
        icon_class: impl Into<String>,
        area: Option<&str>,
        submenus: Vec<Menu>,
    ) -> Self {
        Self {
            title: title.into(),
            icon_class: icon_class.into(),
            area: area.map(str::to_string),
            controller: String::new(),
            action: None,
            submenus,
            is_active: false,
            has_active_child: false,
        }
    }

    pub fn with_submenus(mut self, submenus: Vec<Menu>) -> Self {
        self.submenus = submenus;
        self
    }

    pub fn is_group(&self) -> bool {
        self.action.is_none()
    }

    pub fn has_submenus(&self) -> bool {
        !self.submenus.is_empty()
    }

    /// Pre-order walk over this entry and all of its descendants.
    pub fn iter(&self) -> impl Iterator<Item = &Menu> {
        let mut stack = vec![self];
        core::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.submenus.iter().rev());
            Some(next)
        })
    }
}
