//! Heading block shared by landing sections.

use leptos::prelude::*;

#[component]
pub fn SectionTitle(#[prop(optional)] subtitle: Option<&'static str>, children: Children) -> impl IntoView {
    view! {
        <div class="section-title">
            {subtitle.map(|s| view! { <p class="section-title__subtitle">{s}</p> })}
            <h2 class="section-title__heading">{children()}</h2>
        </div>
    }
}
