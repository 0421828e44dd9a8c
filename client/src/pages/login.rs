//! Darklang Classic login handoff.
//!
//! Authentication lives on the Classic login host; this page only explains
//! that and forwards the browser there.

use leptos::prelude::*;

use crate::net::account::LOGIN_URL;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in to Darklang Classic"</h1>
                <p class="login-card__subtitle">"Classic accounts sign in on the Darklang login site."</p>
                <a href=LOGIN_URL class="button button--primary">"Continue to login"</a>
                <p class="login-card__footer">
                    "No account yet? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
