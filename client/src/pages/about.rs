//! About Darklang Classic.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="about-page__inner">
                <h1>"About Darklang Classic"</h1>
                <p>
                    "Darklang Classic is our hosted, browser-based editor for building backends. "
                    "HTTP handlers, datastores, cron jobs, and workers are written in one place "
                    "and deployed the moment you type."
                </p>
                <p>
                    "Classic continues to run for existing users while we build the next version of "
                    "Darklang around the CLI, a package manager, and AI-assisted development."
                </p>
                <div class="about-page__actions">
                    <a class="button button--primary" href="/signup">"Sign up"</a>
                    <a class="button button--outline" href="/login">"Log in"</a>
                </div>
            </section>
        </div>
    }
}
