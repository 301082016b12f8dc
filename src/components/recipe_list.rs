//! Recipe List Component
//!
//! Full redraw of the recipe container from the current snapshot.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::Command;
use crate::render::{RecipeCard, RecipeListView};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecipeList() -> impl IntoView {
    let store = use_app_store();

    let contents = move || {
        let recipes = store.recipes().get();
        match RecipeListView::build(&recipes, store.load_failed().get()) {
            RecipeListView::Failed(message) => view! { <p class="load-error">{message}</p> }.into_any(),
            RecipeListView::Empty(message) => view! { <p class="empty-list">{message}</p> }.into_any(),
            RecipeListView::Cards(cards) => cards
                .into_iter()
                .map(|card| view! { <RecipeCardView card=card /> })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div id="recipes-container" class="recipes-container">
            {contents}
        </div>
    }
}

/// A single recipe card
#[component]
fn RecipeCardView(card: RecipeCard) -> impl IntoView {
    let ctx = use_app_context();
    let id = card.id;

    view! {
        <div class="card recipe-card">
            <div class="recipe-content">
                <h3>{card.name}</h3>
                <p class="ingredients"><strong>"Ingredients:"</strong> " " {card.ingredients}</p>
                <p class="steps">{card.steps}</p>
                <button class="delete-btn" on:click=move |_| ctx.send(Command::Delete(id))>
                    "Delete Recipe"
                </button>
            </div>
        </div>
    }
}
