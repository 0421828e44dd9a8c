//! Site footer.

use leptos::prelude::*;

use crate::components::nav::{DISCORD_URL, DOCS_URL, GITHUB_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <p class="site-footer__tagline">"Darklang: backends without the deployment."</p>
                <ul class="site-footer__links">
                    <li><a href=DOCS_URL target="_blank" rel="noopener noreferrer">"Docs"</a></li>
                    <li><a href=GITHUB_URL target="_blank" rel="noopener noreferrer">"GitHub"</a></li>
                    <li><a href=DISCORD_URL target="_blank" rel="noopener noreferrer">"Discord"</a></li>
                    <li><a href="/roadmap">"Roadmap"</a></li>
                    <li><a href="/sponsor">"Sponsor"</a></li>
                </ul>
            </div>
        </footer>
    }
}
