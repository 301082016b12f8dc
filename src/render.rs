//! Render Models
//!
//! Pure conversion from the current snapshot to what the list and the AI
//! panel display. Components only draw these.

use crate::config::{MSG_BACKEND_DOWN, MSG_NO_RECIPES};
use crate::models::{Recipe, SuggestionOutcome};

/// One recipe card
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub id: u32,
    pub name: String,
    /// Comma-joined for display
    pub ingredients: String,
    pub steps: String,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.join(", "),
            steps: recipe.steps.clone(),
        }
    }
}

/// Full contents of the recipe list container
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeListView {
    Failed(&'static str),
    Empty(&'static str),
    Cards(Vec<RecipeCard>),
}

impl RecipeListView {
    pub fn build(recipes: &[Recipe], load_failed: bool) -> Self {
        if load_failed {
            return RecipeListView::Failed(MSG_BACKEND_DOWN);
        }
        if recipes.is_empty() {
            return RecipeListView::Empty(MSG_NO_RECIPES);
        }
        RecipeListView::Cards(recipes.iter().map(RecipeCard::from).collect())
    }
}

/// Contents of the AI result block
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionPanel {
    pub message: String,
    pub is_error: bool,
    /// Text handed to the save action, if saving is offered
    pub save_text: Option<String>,
}

impl SuggestionPanel {
    pub fn from_outcome(outcome: &SuggestionOutcome) -> Self {
        match outcome {
            SuggestionOutcome::Suggestion(text) => Self {
                message: text.clone(),
                is_error: false,
                save_text: Some(text.clone()),
            },
            SuggestionOutcome::Failed(detail) => Self {
                message: format!("⚠️ Error: {}", detail),
                is_error: true,
                save_text: None,
            },
        }
    }
}
