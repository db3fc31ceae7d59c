//! The composed per-request entry point.

use std::sync::Arc;

use tracing::debug;

use navkit_auth::Principal;
use navkit_core::Route;

use crate::layout::{self, Layout};
use crate::{
    LanguageOption, Localizer, MenuAuthorizer, MenuRenderer, MenuResult, MenuStyle, UrlResolver,
};

/// Authorizes and renders the navigation for one request at a time.
///
/// Holds only read-only state, so one instance can serve concurrent requests.
#[derive(Clone)]
pub struct Sidebar {
    authorizer: MenuAuthorizer,
    resolver: Arc<dyn UrlResolver + Send + Sync>,
    localizer: Arc<dyn Localizer + Send + Sync>,
    style: MenuStyle,
    languages: Vec<LanguageOption>,
}

impl Sidebar {
    pub fn new(
        authorizer: MenuAuthorizer,
        resolver: Arc<dyn UrlResolver + Send + Sync>,
        localizer: Arc<dyn Localizer + Send + Sync>,
        style: MenuStyle,
        languages: Vec<LanguageOption>,
    ) -> Self {
        Self {
            authorizer,
            resolver,
            localizer,
            style,
            languages,
        }
    }

    pub fn authorizer(&self) -> &MenuAuthorizer {
        &self.authorizer
    }

    pub fn languages(&self) -> &[LanguageOption] {
        &self.languages
    }

    /// Menu markup for `principal` on `route`.
    pub fn render_authorized_menu(&self, principal: &Principal, route: &Route) -> MenuResult<String> {
        let menus = self.authorizer.authorized_menus(principal, route)?;
        let html = MenuRenderer::new(self.resolver.as_ref(), &self.style)
            .in_language(route.language())
            .render(&menus)?;

        debug!(route = %route, bytes = html.len(), "rendered sidebar menu");
        Ok(html)
    }

    /// Menu plus search box and header links.
    pub fn render_layout(&self, principal: &Principal, route: &Route) -> MenuResult<Layout> {
        let resolver = self.resolver.as_ref();
        let localizer = self.localizer.as_ref();
        let language = route.language();

        Ok(Layout {
            search: layout::sidebar_search(localizer, language),
            menu: self.render_authorized_menu(principal, route)?,
            profile_link: layout::profile_link(resolver, localizer, language)?,
            language_link: layout::language_link(resolver, localizer, &self.languages, route),
            logout_link: layout::logout_link(resolver, localizer, language)?,
        })
    }
}

impl core::fmt::Debug for Sidebar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sidebar")
            .field("authorizer", &self.authorizer)
            .field("style", &self.style)
            .field("languages", &self.languages)
            .finish_non_exhaustive()
    }
}
