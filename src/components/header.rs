//! Page Header Component
//!
//! Title plus the dark/light toggle.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::Command;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <header class="app-header">
            <h1>"SmartCook " <span class="logo">"🍳"</span></h1>
            <button
                id="theme-toggle"
                class="theme-toggle"
                title="Toggle theme"
                on:click=move |_| ctx.send(Command::ToggleTheme)
            >
                <span id="theme-icon">{move || store.theme().get().glyph()}</span>
            </button>
        </header>
    }
}
