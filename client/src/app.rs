//! Root application component with routing and shared layout.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::{
    about::AboutPage, cli::CliPage, home::HomePage, login::LoginPage, not_found::NotFoundPage, roadmap::RoadmapPage,
    signup::SignupPage, sponsor::SponsorPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/assets/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The header and footer sit outside `<Routes>` so they persist across
/// client-side navigation; the header reads the location itself.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/darklang-www.css"/>
        <Title text="Darklang"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("roadmap") view=RoadmapPage/>
                    <Route path=StaticSegment("cli") view=CliPage/>
                    <Route path=StaticSegment("sponsor") view=SponsorPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
