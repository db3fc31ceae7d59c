//! End-to-end: configuration → assembly → authorized, rendered sidebar.

use std::sync::Arc;

use navkit_auth::{AuthzError, Permission, Principal, PrincipalId, Role, RolePolicy};
use navkit_core::{Route, RouteError};
use navkit_menu::assembly::build_sidebar;
use navkit_menu::{MenuError, Sidebar, SidebarConfig};

fn policy() -> RolePolicy {
    RolePolicy::new()
        .grant(Role::new("admin"), [Permission::wildcard()])
        .grant(
            Role::new("user"),
            [
                Permission::for_route(None, "Home", "Index"),
                Permission::for_route(Some("Administration"), "Roles", "Index"),
            ],
        )
}

fn sidebar() -> Sidebar {
    build_sidebar(&SidebarConfig::default(), Arc::new(policy())).unwrap()
}

fn user() -> Principal {
    Principal::authenticated(PrincipalId::new(), vec![Role::new("user")])
}

#[test]
fn single_authorized_active_entry() {
    let catalog = r#"[
        { "title": "Roles", "icon_class": "fa fa-male", "area": "Administration",
          "controller": "Roles", "action": "Index", "submenus": [] }
    ]"#;
    let dir = std::env::temp_dir().join(format!("navkit-e2e-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("menus.json"), catalog).unwrap();
    std::fs::write(dir.join("sidebar.json"), r#"{ "catalog": "menus.json" }"#).unwrap();

    let config = SidebarConfig::from_path(&dir.join("sidebar.json")).unwrap();
    let sidebar = build_sidebar(&config, Arc::new(policy())).unwrap();
    let route = Route::new(Some("Administration"), "Roles", "Index");

    let html = sidebar.render_authorized_menu(&user(), &route).unwrap();
    assert_eq!(
        html,
        concat!(
            r#"<li class="menu active active-hovering">"#,
            r#"<a href="/Administration/Roles/Index"><i class="fa fa-male"></i><span>Roles</span></a>"#,
            "</li>"
        )
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn user_sees_pruned_menu_with_active_path() {
    let route = Route::new(Some("Administration"), "Roles", "Index");
    let html = sidebar().render_authorized_menu(&user(), &route).unwrap();

    assert_eq!(
        html,
        concat!(
            r#"<li class="menu"><a href="/Home/Index"><i class="fa fa-home"></i><span>Home</span></a></li>"#,
            r#"<li class="menu submenu has-active-child open">"#,
            r#"<a><i class="fa fa-users"></i><span>Administration</span><i class="arrow fa fa-chevron-right"></i></a>"#,
            "<ul>",
            r#"<li class="menu active active-hovering">"#,
            r#"<a href="/Administration/Roles/Index"><i class="fa fa-male"></i><span>Roles</span></a>"#,
            "</li>",
            "</ul>",
            "</li>"
        )
    );
}

#[test]
fn admin_sees_every_entry() {
    let admin = Principal::authenticated(PrincipalId::new(), vec![Role::new("admin")]);
    let html = sidebar()
        .render_authorized_menu(&admin, &Route::new(None, "Home", "Index"))
        .unwrap();

    assert!(html.contains("<span>Accounts</span>"));
    assert!(html.contains("<span>Roles</span>"));
    assert!(html.starts_with(r#"<li class="menu active active-hovering"><a href="/Home/Index">"#));
}

#[test]
fn anonymous_sees_empty_menu() {
    let html = sidebar()
        .render_authorized_menu(&Principal::anonymous(), &Route::new(None, "Account", "Login"))
        .unwrap();
    assert_eq!(html, "");
}

#[test]
fn lithuanian_request_localizes_titles_and_links() {
    let route = Route::new(None, "Home", "Index").with_language(Some("lt-LT"));
    let html = sidebar().render_authorized_menu(&user(), &route).unwrap();

    assert!(html.contains(r#"<a href="/lt-LT/Home/Index"><i class="fa fa-home"></i><span>Pradžia</span></a>"#));
    assert!(html.contains("<span>Administravimas</span>"));
}

#[test]
fn rendering_twice_is_identical() {
    let sidebar = sidebar();
    let route = Route::new(Some("Administration"), "Roles", "Index");
    assert_eq!(
        sidebar.render_authorized_menu(&user(), &route).unwrap(),
        sidebar.render_authorized_menu(&user(), &route).unwrap()
    );
}

#[test]
fn authorization_failure_fails_the_render() {
    let failing = |_: &Principal, _: Option<&str>, _: &str, _: &str| -> Result<bool, AuthzError> {
        Err(AuthzError::unavailable("identity store unreachable"))
    };
    let sidebar = build_sidebar(&SidebarConfig::default(), Arc::new(failing)).unwrap();

    let err = sidebar
        .render_authorized_menu(&user(), &Route::new(None, "Home", "Index"))
        .unwrap_err();
    assert_eq!(err, MenuError::Authorization(AuthzError::unavailable("identity store unreachable")));
}

#[test]
fn unknown_role_under_strict_policy_fails_the_render() {
    let sidebar = build_sidebar(&SidebarConfig::default(), Arc::new(policy().strict())).unwrap();
    let ghost = Principal::authenticated(PrincipalId::new(), vec![Role::new("ghost")]);

    let err = sidebar
        .render_authorized_menu(&ghost, &Route::new(None, "Home", "Index"))
        .unwrap_err();
    assert!(matches!(err, MenuError::Authorization(AuthzError::UnknownRole(_))));
}

#[test]
fn layout_includes_header_and_search() {
    let route = Route::new(None, "Home", "Index");
    let layout = sidebar().render_layout(&user(), &route).unwrap();

    assert_eq!(layout.search, r#"<input id="SearchInput" placeholder="Search..." type="text" />"#);
    assert_eq!(
        layout.profile_link,
        r#"<a href="/Profile/Edit"><i class="fa fa-user"></i><span>Profile</span></a>"#
    );
    assert_eq!(
        layout.logout_link,
        r#"<a href="/Account/Logout"><i class="fa fa-share"></i><span>Logout</span></a>"#
    );
    assert!(layout.language_link.contains(r#"href="/lt-LT/Home/Index""#));
    assert!(layout.menu.contains("<span>Home</span>"));
}

#[test]
fn route_error_is_exposed_as_menu_error() {
    let err: MenuError = RouteError::unresolved(None, "Reports", "Index").into();
    assert_eq!(err.to_string(), "no route for area '', controller 'Reports', action 'Index'");
}
