//! Page chrome around the menu: sidebar search box and header links.

use serde::Serialize;

use navkit_core::{Route, RouteError};

use crate::{LanguageOption, Localizer, Tag, UrlResolver};

/// Everything the page layout needs from navkit for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub search: String,
    pub menu: String,
    pub profile_link: String,
    pub language_link: String,
    pub logout_link: String,
}

/// `<input id="SearchInput" placeholder="Search..." type="text" />`
pub fn sidebar_search(localizer: &dyn Localizer, language: Option<&str>) -> String {
    let placeholder = format!("{}...", localizer.localize(language, "Search"));
    Tag::new("input")
        .attr("id", "SearchInput")
        .attr("placeholder", placeholder)
        .attr("type", "text")
        .self_closing()
        .to_string()
}

/// Link to the current user's profile page.
pub fn profile_link(
    resolver: &dyn UrlResolver,
    localizer: &dyn Localizer,
    language: Option<&str>,
) -> Result<String, RouteError> {
    header_link(resolver, localizer, language, "Profile", "Edit", "fa fa-user", "Profile")
}

/// Link that signs the current user out.
pub fn logout_link(
    resolver: &dyn UrlResolver,
    localizer: &dyn Localizer,
    language: Option<&str>,
) -> Result<String, RouteError> {
    header_link(resolver, localizer, language, "Account", "Logout", "fa fa-share", "Logout")
}

fn header_link(
    resolver: &dyn UrlResolver,
    localizer: &dyn Localizer,
    language: Option<&str>,
    controller: &str,
    action: &str,
    icon_class: &str,
    title_key: &str,
) -> Result<String, RouteError> {
    let href = resolver.resolve(language, None, controller, action)?;
    let icon = Tag::new("i").class(icon_class).to_string();
    let title = Tag::new("span").text(&localizer.localize(language, title_key)).to_string();

    Ok(Tag::new("a").attr("href", href).html(&icon).html(&title).to_string())
}

/// Language dropdown: a toggle followed by one link per language, each
/// pointing at the current page in that language.
pub fn language_link(
    resolver: &dyn UrlResolver,
    localizer: &dyn Localizer,
    languages: &[LanguageOption],
    route: &Route,
) -> String {
    let flag = Tag::new("i").class("fa fa-flag").to_string();
    let caret = Tag::new("span").class("caret").to_string();
    let toggle = Tag::new("a")
        .class("dropdown-toggle")
        .attr("data-toggle", "dropdown")
        .html(&flag)
        .text(&format!(" {} ", localizer.localize(route.language(), "Language")))
        .html(&caret);

    let mut entries = String::new();
    for language in languages {
        let image = Tag::new("img")
            .attr("src", format!("/Images/Flags/{}.gif", language.abbreviation))
            .self_closing()
            .to_string();
        let link = Tag::new("a")
            .attr("href", resolver.resolve_current(route, Some(language.abbreviation.as_str())))
            .html(&image)
            .text(&format!(" {}", language.name));
        entries.push_str(&Tag::new("li").html(&link.to_string()).to_string());
    }

    let menu = Tag::new("ul")
        .class("dropdown-menu")
        .attr("role", "menu")
        .html(&entries);

    format!("{toggle}{menu}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ResourceTable, RouteTable};

    fn routes() -> RouteTable {
        RouteTable::new(Some("en-GB"))
            .register(None, "Profile", "Edit")
            .register(None, "Account", "Logout")
    }

    fn languages() -> Vec<LanguageOption> {
        vec![
            LanguageOption::new("en-GB", "English"),
            LanguageOption::new("lt-LT", "Lietuvių"),
        ]
    }

    #[test]
    fn search_input() {
        assert_eq!(
            sidebar_search(&ResourceTable::builtin(), None),
            r#"<input id="SearchInput" placeholder="Search..." type="text" />"#
        );
        assert_eq!(
            sidebar_search(&ResourceTable::builtin(), Some("lt-LT")),
            r#"<input id="SearchInput" placeholder="Paieška..." type="text" />"#
        );
    }

    #[test]
    fn profile_link_points_to_profile_edit() {
        assert_eq!(
            profile_link(&routes(), &ResourceTable::builtin(), None).unwrap(),
            r#"<a href="/Profile/Edit"><i class="fa fa-user"></i><span>Profile</span></a>"#
        );
    }

    #[test]
    fn logout_link_points_to_account_logout() {
        assert_eq!(
            logout_link(&routes(), &ResourceTable::builtin(), None).unwrap(),
            r#"<a href="/Account/Logout"><i class="fa fa-share"></i><span>Logout</span></a>"#
        );
    }

    #[test]
    fn header_links_follow_language() {
        let html = logout_link(&routes(), &ResourceTable::builtin(), Some("lt-LT")).unwrap();
        assert_eq!(
            html,
            r#"<a href="/lt-LT/Account/Logout"><i class="fa fa-share"></i><span>Atsijungti</span></a>"#
        );
    }

    #[test]
    fn header_link_without_route_fails() {
        let err = profile_link(&RouteTable::new(None), &ResourceTable::builtin(), None).unwrap_err();
        assert_eq!(err, RouteError::unresolved(None, "Profile", "Edit"));
    }

    #[test]
    fn language_dropdown_links_current_page_in_each_language() {
        let route = Route::new(None, "Test", "Test");
        let html = language_link(&routes(), &ResourceTable::builtin(), &languages(), &route);

        assert_eq!(
            html,
            concat!(
                r#"<a class="dropdown-toggle" data-toggle="dropdown">"#,
                r#"<i class="fa fa-flag"></i> Language <span class="caret"></span></a>"#,
                r#"<ul class="dropdown-menu" role="menu">"#,
                r#"<li><a href="/Test/Test"><img src="/Images/Flags/en-GB.gif" /> English</a></li>"#,
                r#"<li><a href="/lt-LT/Test/Test"><img src="/Images/Flags/lt-LT.gif" /> Lietuvių</a></li>"#,
                "</ul>"
            )
        );
    }

    #[test]
    fn language_dropdown_keeps_area() {
        let route = Route::new(Some("Administration"), "Roles", "Index").with_language(Some("lt-LT"));
        let html = language_link(&routes(), &ResourceTable::builtin(), &languages(), &route);

        assert!(html.contains(" Kalba "));
        assert!(html.contains(r#"href="/Administration/Roles/Index""#));
        assert!(html.contains(r#"href="/lt-LT/Administration/Roles/Index""#));
    }
}
