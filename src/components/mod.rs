//! UI Components
//!
//! Leptos components for the recipe page.

mod header;
mod recipe_form;
mod ai_panel;
mod recipe_list;

pub use header::Header;
pub use recipe_form::RecipeEntryForm;
pub use ai_panel::AiPanel;
pub use recipe_list::RecipeList;
