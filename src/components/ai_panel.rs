//! AI Suggestion Panel Component
//!
//! Ingredient input, the suggest button and the result block with its
//! optional save action.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{LABEL_SUGGEST, LABEL_THINKING};
use crate::context::use_app_context;
use crate::controller::Command;
use crate::render::SuggestionPanel;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AiPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let suggest = move |_| ctx.send(Command::Suggest(store.ai_ingredients().get_untracked()));

    view! {
        <div class="card ai-card">
            <h2>"Ask the AI Chef"</h2>
            <div class="ai-input-row">
                <input
                    id="ai-ingredients"
                    type="text"
                    placeholder="What's in your fridge? (comma separated)"
                    prop:value=move || store.ai_ingredients().get()
                    on:input=move |ev| {
                        let input = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                        if let Some(input) = input {
                            store.ai_ingredients().set(input.value());
                        }
                    }
                />
                <button
                    id="suggest-btn"
                    class="primary-btn"
                    disabled=move || store.suggesting().get()
                    on:click=suggest
                >
                    {move || if store.suggesting().get() { LABEL_THINKING } else { LABEL_SUGGEST }}
                </button>
            </div>

            {move || store.suggestion().get().map(|outcome| {
                let SuggestionPanel { message, is_error, save_text } = SuggestionPanel::from_outcome(&outcome);
                view! {
                    <div id="ai-result" class="ai-result">
                        <div class="suggestion-content">
                            {if is_error {
                                view! { <p class="ai-error">{message}</p> }.into_any()
                            } else {
                                view! { <pre id="raw-suggestion" class="raw-suggestion">{message}</pre> }.into_any()
                            }}
                            {save_text.map(|text| view! {
                                <button
                                    id="save-ai-btn"
                                    class="secondary-btn"
                                    on:click=move |_| ctx.send(Command::SaveSuggestion(text.clone()))
                                >
                                    "Add to My Recipes"
                                </button>
                            })}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
