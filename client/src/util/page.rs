//! Route-to-page resolution and per-page header theming.
//!
//! DESIGN
//! ======
//! The header is rendered once above the router outlet, so it derives the
//! active page from the current path rather than receiving it as a prop from
//! each page.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Top-level pages the site knows about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageName {
    #[default]
    Home,
    About,
    Login,
    Signup,
    Roadmap,
    Cli,
    Sponsor,
    /// Anything unrouted (the 404 page).
    Other,
}

impl PageName {
    /// Resolve a location path such as `/about` or `/cli/` to a page.
    pub fn from_path(path: &str) -> Self {
        let first = path.trim_start_matches('/').split(['/', '?', '#']).next().unwrap_or_default();
        match first {
            "" => Self::Home,
            "about" => Self::About,
            "login" => Self::Login,
            "signup" => Self::Signup,
            "roadmap" => Self::Roadmap,
            "cli" => Self::Cli,
            "sponsor" => Self::Sponsor,
            _ => Self::Other,
        }
    }

    pub fn header_theme(self) -> HeaderTheme {
        match self {
            Self::About | Self::Cli => HeaderTheme::Dark,
            _ => HeaderTheme::Light,
        }
    }
}

/// Header background variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderTheme {
    #[default]
    Light,
    Dark,
}

impl HeaderTheme {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// BEM modifier class applied to the `<header>`.
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "site-header site-header--light",
            Self::Dark => "site-header site-header--dark",
        }
    }

    pub fn logo_src(self) -> &'static str {
        match self {
            Self::Light => "/assets/darklang-logo.svg",
            Self::Dark => "/assets/darklang-logo-dbg.svg",
        }
    }

    pub fn github_logo_src(self) -> &'static str {
        match self {
            Self::Light => "/assets/github-logo.svg",
            Self::Dark => "/assets/github-logo-white.svg",
        }
    }
}
