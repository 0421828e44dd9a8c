//! Site header with page-aware theming.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the router outlet. The active page is derived from
//! the current location so dark pages (about, cli) get the inverted logo set.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::dropdown::Dropdown;
use crate::components::nav::{CLASSIC_MENU, COMPANY_MENU, DISCORD_URL, GITHUB_URL, NavLink, PRIMARY_NAV};
use crate::util::page::PageName;

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let theme = Memo::new(move |_| PageName::from_path(&location.pathname.get()).header_theme());

    view! {
        <header class=move || theme.get().class()>
            <div class="site-header__inner">
                <a href="/" class="site-header__brand">
                    <img src=move || theme.get().logo_src() alt="Darklang Logo" class="site-header__logo"/>
                </a>
                <nav class="site-header__nav">
                    <ul>
                        {PRIMARY_NAV
                            .iter()
                            .map(|item| view! { <li><NavLink item=*item class="site-header__link"/></li> })
                            .collect_view()}
                        <li>
                            <Dropdown label="Company" items=COMPANY_MENU/>
                        </li>
                    </ul>
                </nav>
                <div class="site-header__social">
                    <a href=DISCORD_URL target="_blank" rel="noopener noreferrer">
                        <img src="/assets/discord-logo.svg" alt="Discord" class="site-header__icon"/>
                    </a>
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                        <img
                            src=move || theme.get().github_logo_src()
                            alt="GitHub"
                            class="site-header__icon site-header__icon--small"
                        />
                    </a>
                    <div class="site-header__divider"></div>
                    <Dropdown label="Darklang Classic" items=CLASSIC_MENU/>
                </div>
            </div>
        </header>
    }
}
