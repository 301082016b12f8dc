//! Global Application State Store
//!
//! Render snapshot only: every mutation re-fetches the list from the
//! backend, so nothing here is authoritative.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::Update;
use crate::models::{Recipe, RecipeForm, SuggestionOutcome};
use crate::theme::{self, Theme};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last fetched recipe list
    pub recipes: Vec<Recipe>,
    /// Last fetch failed (backend unreachable)
    pub load_failed: bool,
    /// Manual entry form
    pub form: RecipeForm,
    /// Comma-separated ingredients for the AI request
    pub ai_ingredients: String,
    /// AI request in flight
    pub suggesting: bool,
    /// Result block, hidden when None
    pub suggestion: Option<SuggestionOutcome>,
    pub theme: Theme,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply a controller update to the store
pub fn apply_update(store: AppStore, update: Update) {
    match update {
        Update::Recipes(recipes) => {
            store.recipes().set(recipes);
            store.load_failed().set(false);
        }
        Update::LoadFailed => store.load_failed().set(true),
        Update::ResetForm => store.form().set(RecipeForm::default()),
        Update::Suggesting(busy) => store.suggesting().set(busy),
        Update::Suggestion(outcome) => store.suggestion().set(Some(outcome)),
        Update::HideSuggestion => store.suggestion().set(None),
        Update::Theme(next) => {
            theme::apply_to_document(next);
            store.theme().set(next);
        }
    }
}
