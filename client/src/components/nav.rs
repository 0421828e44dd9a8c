//! Navigation link data and the shared link renderer.
//!
//! DESIGN
//! ======
//! Menus are plain data so header layout and tests share one source of truth.
//! Internal links are ordinary anchors; the router intercepts same-origin
//! clicks, so no separate `<A>` variant is needed.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;

/// A single navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub text: &'static str,
    pub href: &'static str,
    /// Opens in a new tab.
    pub external: bool,
}

impl NavItem {
    pub const fn internal(text: &'static str, href: &'static str) -> Self {
        Self { text, href, external: false }
    }

    pub const fn external(text: &'static str, href: &'static str) -> Self {
        Self { text, href, external: true }
    }

    pub fn target(self) -> Option<&'static str> {
        self.external.then_some("_blank")
    }

    pub fn rel(self) -> Option<&'static str> {
        self.external.then_some("noopener noreferrer")
    }
}

pub const DOCS_URL: &str = "https://docs.darklang.com/next/introduction";
pub const DISCORD_URL: &str = "https://darklang.com/discord";
pub const GITHUB_URL: &str = "https://github.com/darklang/dark";

/// Inline links in the header's primary nav.
pub const PRIMARY_NAV: &[NavItem] = &[
    NavItem::internal("Get Started", "/"),
    NavItem::external("Docs", DOCS_URL),
    NavItem::internal("CLI", "/cli"),
    NavItem::internal("Cloud", "/cloud"),
    NavItem::internal("Packages", "/packages"),
    NavItem::internal("Examples", "/examples"),
    NavItem::internal("Try", "/try"),
];

/// "Company" dropdown entries.
pub const COMPANY_MENU: &[NavItem] = &[
    NavItem::internal("Roadmap", "/roadmap"),
    NavItem::external("Blog", "https://blog.darklang.com/"),
    NavItem::external("Sponsor us", "https://github.com/sponsors/darklang"),
];

/// "Darklang Classic" dropdown entries.
pub const CLASSIC_MENU: &[NavItem] = &[
    NavItem::internal("About", "/about"),
    NavItem::internal("Log in", "/login"),
    NavItem::internal("Sign up", "/signup"),
];

/// Anchor for a `NavItem`, with new-tab attributes on external links.
#[component]
pub fn NavLink(
    item: NavItem,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_pick: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <a
            class=class
            href=item.href
            target=item.target()
            rel=item.rel()
            on:click=move |_| {
                if let Some(on_pick) = on_pick.as_ref() {
                    on_pick.run(());
                }
            }
        >
            {item.text}
        </a>
    }
}
