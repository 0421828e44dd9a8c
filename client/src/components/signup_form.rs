//! Darklang Classic signup form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the inputs to a `SignupState` signal and runs one create-account call
//! per submit through `HttpAccountGateway`. All validation and outcome
//! handling lives in `state::signup`; this component only wires events and
//! renders the current phase.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::account::{AccountGateway, HttpAccountGateway};
use crate::net::account::LOGIN_URL;
use crate::state::signup::SignupState;

pub const CODE_OF_CONDUCT_URL: &str = "https://github.com/darklang/dark/blob/main/CODE_OF_CONDUCT.md";

#[component]
pub fn SignupForm() -> impl IntoView {
    let state = RwSignal::new(SignupState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = HttpAccountGateway::default().create_account(&request).await;
            match &outcome {
                Ok(resp) if resp.is_success() => log::info!("account created"),
                Ok(resp) => log::info!("account service rejected signup: status={}", resp.status),
                Err(e) => log::warn!("account service unreachable: {e}"),
            }
            state.update(|s| s.finish_submit(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <form id="sign-up-form" class="signup-form" on:submit=on_submit>
            <h1 class="signup-form__title">"Sign up for Darklang Classic"</h1>
            <Show
                when=move || state.with(SignupState::is_complete)
                fallback=move || {
                    view! {
                        <Show when=move || state.with(SignupState::has_errors)>
                            <div id="errors" class="signup-form__errors" role="alert">
                                <ul id="error-list">
                                    {move || {
                                        state
                                            .with(|s| s.errors.as_slice().to_vec())
                                            .into_iter()
                                            .map(|msg| view! { <li>{msg}</li> })
                                            .collect_view()
                                    }}
                                </ul>
                            </div>
                        </Show>
                        <label class="signup-form__label" for="name">"Name"</label>
                        <input
                            id="name"
                            class="signup-form__input"
                            type="text"
                            autocomplete="name"
                            prop:value=move || state.with(|s| s.fields.name.clone())
                            on:input=move |ev| state.update(|s| s.fields.name = event_target_value(&ev))
                        />
                        <label class="signup-form__label" for="email">"Email"</label>
                        <input
                            id="email"
                            class="signup-form__input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || state.with(|s| s.fields.email.clone())
                            on:input=move |ev| state.update(|s| s.fields.email = event_target_value(&ev))
                        />
                        <label class="signup-form__label" for="username">"Username"</label>
                        <input
                            id="username"
                            class="signup-form__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || state.with(|s| s.fields.username.clone())
                            on:input=move |ev| state.update(|s| s.fields.username = event_target_value(&ev))
                        />
                        <label class="signup-form__consent">
                            <input
                                id="code-of-conduct"
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.fields.consent)
                                on:change=move |ev| state.update(|s| s.fields.consent = event_target_checked(&ev))
                            />
                            " I agree to the "
                            <a href=CODE_OF_CONDUCT_URL target="_blank" rel="noopener noreferrer">
                                "code of conduct"
                            </a>
                        </label>
                        <button
                            class="signup-form__submit"
                            type="submit"
                            disabled=move || state.with(SignupState::is_pending)
                        >
                            {move || if state.with(SignupState::is_pending) { "Signing up..." } else { "Sign up" }}
                        </button>
                    }
                }
            >
                <SignupSuccess/>
            </Show>
        </form>
    }
}

/// Confirmation shown in place of the form once the account exists.
#[component]
pub fn SignupSuccess() -> impl IntoView {
    view! {
        <div class="signup-form__success">
            "Success! "
            <a class="signup-form__login" href=LOGIN_URL>"log in"</a>
        </div>
    }
}
