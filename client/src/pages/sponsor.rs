//! Sponsorship page.

use leptos::prelude::*;

use crate::components::pricing::PricingTiers;

#[component]
pub fn SponsorPage() -> impl IntoView {
    view! {
        <div class="sponsor-page">
            <header class="sponsor-page__header">
                <h1>"Sponsor Darklang"</h1>
                <p>
                    "Support the future of backend development. Your sponsorship helps us build and "
                    "maintain Darklang as an open-source platform."
                </p>
            </header>

            <PricingTiers/>

            <section class="sponsor-page__custom">
                <h2>"Custom Sponsorship"</h2>
                <p>
                    "Looking for a custom sponsorship package or have specific requirements? We're happy "
                    "to work with you to create a sponsorship that aligns with your goals."
                </p>
                <a class="button button--primary" href="mailto:sponsors@darklang.com">"Contact Us"</a>
            </section>

            <section class="sponsor-page__sponsors">
                <h2>"Our Sponsors"</h2>
                <div class="sponsor-page__logos">
                    {(1..=4).map(|_| view! { <div class="sponsor-page__logo">"Sponsor Logo"</div> }).collect_view()}
                </div>
            </section>
        </div>
    }
}
