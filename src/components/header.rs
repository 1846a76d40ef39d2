//! Header Component
//!
//! Top bar with the new-plate trigger.

use leptos::prelude::*;

/// App header with the "New plate" button
#[component]
pub fn Header(#[prop(into)] on_open_add_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-logo">"Plateboard"</h1>
            <button
                type="button"
                class="new-plate-btn"
                on:click=move |_| on_open_add_modal.run(())
            >
                "New plate"
                <span class="btn-icon">"+"</span>
            </button>
        </header>
    }
}
