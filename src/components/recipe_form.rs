//! Recipe Entry Form Component
//!
//! Manual recipe creation. Fields are only required, never validated.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::Command;
use crate::models::RecipeFormStoreFields;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecipeEntryForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form = store.form();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.send(Command::AddRecipe(form.get_untracked()));
    };

    view! {
        <form id="recipe-form" class="card recipe-form" on:submit=submit>
            <h2>"Add a Recipe"</h2>
            <input
                id="name"
                type="text"
                placeholder="Recipe name"
                required
                prop:value=move || form.name().get()
                on:input=move |ev| form.name().set(event_target_value(&ev))
            />
            <input
                id="ingredients"
                type="text"
                placeholder="Ingredients (comma separated)"
                required
                prop:value=move || form.ingredients().get()
                on:input=move |ev| form.ingredients().set(event_target_value(&ev))
            />
            <textarea
                id="steps"
                placeholder="Preparation steps"
                required
                prop:value=move || form.steps().get()
                on:input=move |ev| form.steps().set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="primary-btn">"Add Recipe"</button>
        </form>
    }
}
