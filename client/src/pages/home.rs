//! Landing page.

use leptos::prelude::*;

use crate::components::backend_features::BackendFeatures;
use crate::components::section_title::SectionTitle;
use crate::components::terminal::Terminal;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <div class="hero__inner">
                    <h1 class="hero__title">"Darklang: a programming language for backends and scripts"</h1>
                    <p class="hero__lead">
                        "Write code, not infrastructure. Darklang is a functional language with a "
                        "built-in package manager, instant deployment, and traces of every request."
                    </p>
                    <div class="hero__actions">
                        <a class="button button--primary" href="/cli">">_ Get the CLI"</a>
                        <a
                            class="button button--outline"
                            href="https://docs.darklang.com/next/introduction"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Read the docs"
                        </a>
                    </div>
                </div>
            </section>

            <BackendFeatures/>

            <section class="home-cli">
                <div class="home-cli__inner">
                    <SectionTitle subtitle="Darklang CLI">"Scripts you can read, run, and deploy"</SectionTitle>
                    <Terminal>
                        <div>
                            <span class="term-prompt">"$ "</span>
                            <span class="term-accent">"darklang "</span>
                            "@paul.fizzbuzz 3"
                        </div>
                        <div>"1"</div>
                        <div>"2"</div>
                        <div>"Fizz"</div>
                    </Terminal>
                    <a class="button button--primary" href="/cli">"See what the CLI can do"</a>
                </div>
            </section>
        </div>
    }
}
