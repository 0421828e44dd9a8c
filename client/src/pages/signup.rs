//! Signup page hosting the Classic account form.

use leptos::prelude::*;

use crate::components::signup_form::SignupForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="signup-page">
            <div class="signup-page__card">
                <SignupForm/>
            </div>
            <p class="signup-page__note">
                "Already have an account? "
                <a href="/login">"Log in"</a>
            </p>
        </div>
    }
}
