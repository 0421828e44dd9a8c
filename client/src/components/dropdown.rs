//! Click-to-open menu used by the header.

use leptos::prelude::*;

use crate::components::nav::{NavItem, NavLink};

/// Toggle button plus a menu of links. Choosing an entry closes the menu.
#[component]
pub fn Dropdown(label: &'static str, items: &'static [NavItem]) -> impl IntoView {
    let open = RwSignal::new(false);
    let close = Callback::new(move |()| open.set(false));

    view! {
        <div class="dropdown" on:mouseleave=move |_| open.set(false)>
            <button
                class="dropdown__toggle"
                type="button"
                aria-haspopup="true"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {label}
                <span class="dropdown__caret">"▾"</span>
            </button>
            <Show when=move || open.get()>
                <ul class="dropdown__menu" role="menu">
                    {items
                        .iter()
                        .map(|item| {
                            view! {
                                <li role="none">
                                    <NavLink item=*item class="dropdown__item" on_pick=close/>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
