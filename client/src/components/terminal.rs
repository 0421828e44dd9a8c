//! Fake terminal window chrome for CLI transcripts.

use leptos::prelude::*;

#[component]
pub fn Terminal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("terminal {class}")>
            <div class="terminal__bar">
                <span class="terminal__dot terminal__dot--red"></span>
                <span class="terminal__dot terminal__dot--yellow"></span>
                <span class="terminal__dot terminal__dot--green"></span>
            </div>
            <div class="terminal__body">{children()}</div>
        </div>
    }
}
