//! 404 page.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"We couldn't find that page."</p>
            <a class="button button--primary" href="/">"Back home"</a>
        </div>
    }
}
