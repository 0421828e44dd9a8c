use super::*;

#[test]
fn from_path_resolves_known_routes() {
    assert_eq!(PageName::from_path("/"), PageName::Home);
    assert_eq!(PageName::from_path(""), PageName::Home);
    assert_eq!(PageName::from_path("/about"), PageName::About);
    assert_eq!(PageName::from_path("/login"), PageName::Login);
    assert_eq!(PageName::from_path("/signup"), PageName::Signup);
    assert_eq!(PageName::from_path("/roadmap"), PageName::Roadmap);
    assert_eq!(PageName::from_path("/cli"), PageName::Cli);
    assert_eq!(PageName::from_path("/sponsor"), PageName::Sponsor);
}

#[test]
fn from_path_ignores_trailing_segments_and_query() {
    assert_eq!(PageName::from_path("/cli/"), PageName::Cli);
    assert_eq!(PageName::from_path("/about?ref=nav"), PageName::About);
    assert_eq!(PageName::from_path("/signup#form"), PageName::Signup);
}

#[test]
fn from_path_unknown_is_other() {
    assert_eq!(PageName::from_path("/cloud"), PageName::Other);
    assert_eq!(PageName::from_path("/does/not/exist"), PageName::Other);
}

#[test]
fn header_is_dark_only_on_about_and_cli() {
    let dark: Vec<PageName> = [
        PageName::Home,
        PageName::About,
        PageName::Login,
        PageName::Signup,
        PageName::Roadmap,
        PageName::Cli,
        PageName::Sponsor,
        PageName::Other,
    ]
    .into_iter()
    .filter(|p| p.header_theme().is_dark())
    .collect();
    assert_eq!(dark, vec![PageName::About, PageName::Cli]);
}

#[test]
fn dark_theme_swaps_logo_assets() {
    assert_eq!(HeaderTheme::Dark.logo_src(), "/assets/darklang-logo-dbg.svg");
    assert_eq!(HeaderTheme::Dark.github_logo_src(), "/assets/github-logo-white.svg");
    assert_eq!(HeaderTheme::Light.logo_src(), "/assets/darklang-logo.svg");
    assert_eq!(HeaderTheme::Light.github_logo_src(), "/assets/github-logo.svg");
}

#[test]
fn theme_class_carries_modifier() {
    assert!(HeaderTheme::Light.class().ends_with("site-header--light"));
    assert!(HeaderTheme::Dark.class().ends_with("site-header--dark"));
}
