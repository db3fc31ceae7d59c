//! Authorization-aware navigation for server-rendered pages.
//!
//! Control flow per request:
//!
//! 1. [`MenuCatalog`] holds every configured entry (loaded once, read-only).
//! 2. [`MenuAuthorizer`] copies the catalog for the current principal and route,
//!    pruning unauthorized entries and flagging the active path.
//! 3. [`MenuRenderer`] turns the resulting forest into nested `<li>` markup.
//!
//! [`Sidebar`] composes the three; [`assembly::build_sidebar`] builds one from
//! [`SidebarConfig`].

pub mod assembly;
pub mod authorizer;
pub mod catalog;
pub mod config;
pub mod error;
pub mod html;
pub mod layout;
pub mod localize;
pub mod menu;
pub mod render;
pub mod sidebar;
pub mod url;

pub use authorizer::MenuAuthorizer;
pub use catalog::MenuCatalog;
pub use config::{LanguageOption, SidebarConfig};
pub use error::{MenuError, MenuResult};
pub use html::{Tag, html_escape};
pub use layout::Layout;
pub use localize::{Localizer, ResourceTable};
pub use menu::Menu;
pub use render::{MenuRenderer, MenuStyle};
pub use sidebar::Sidebar;
pub use url::{RouteTable, UrlResolver};
