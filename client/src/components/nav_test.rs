use super::*;

#[test]
fn external_items_open_in_new_tab() {
    let item = NavItem::external("Docs", DOCS_URL);
    assert_eq!(item.target(), Some("_blank"));
    assert_eq!(item.rel(), Some("noopener noreferrer"));
}

#[test]
fn internal_items_stay_in_app() {
    let item = NavItem::internal("CLI", "/cli");
    assert_eq!(item.target(), None);
    assert_eq!(item.rel(), None);
}

#[test]
fn primary_nav_order_and_docs_is_only_external() {
    let labels: Vec<&str> = PRIMARY_NAV.iter().map(|i| i.text).collect();
    assert_eq!(labels, ["Get Started", "Docs", "CLI", "Cloud", "Packages", "Examples", "Try"]);
    let external: Vec<&str> = PRIMARY_NAV.iter().filter(|i| i.external).map(|i| i.text).collect();
    assert_eq!(external, ["Docs"]);
}

#[test]
fn company_menu_links_roadmap_internally() {
    assert_eq!(COMPANY_MENU[0], NavItem::internal("Roadmap", "/roadmap"));
    assert!(COMPANY_MENU[1..].iter().all(|i| i.external));
}

#[test]
fn classic_menu_points_at_local_pages() {
    let hrefs: Vec<&str> = CLASSIC_MENU.iter().map(|i| i.href).collect();
    assert_eq!(hrefs, ["/about", "/login", "/signup"]);
    assert!(CLASSIC_MENU.iter().all(|i| !i.external));
}
