//! Recipe Backend Client
//!
//! REST bindings to the recipe service, organized by endpoint group.
//! No retries and no timeouts: every call is a single request.

mod recipe;
mod ai;

use thiserror::Error;

use crate::models::{NewRecipe, Recipe, SuggestionOutcome};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or body decoding failure
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("unexpected status {0}")]
    Status(u16),
}

/// Operations the app needs from the recipe backend
#[allow(async_fn_in_trait)]
pub trait RecipeApi {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError>;
    /// `Ok(true)` iff the server answered 2xx
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<bool, ApiError>;
    /// `Ok(true)` iff the server answered 2xx
    async fn delete_recipe(&self, id: u32) -> Result<bool, ApiError>;
    async fn suggest_recipe(&self, ingredients: &[String]) -> Result<SuggestionOutcome, ApiError>;
}

/// HTTP implementation over `gloo-net`
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    base_url: String,
}

impl HttpRecipeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

impl RecipeApi for HttpRecipeApi {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        recipe::list_recipes(&self.url("/recipes")).await
    }

    async fn create_recipe(&self, new_recipe: &NewRecipe) -> Result<bool, ApiError> {
        recipe::create_recipe(&self.url("/recipes"), new_recipe).await
    }

    async fn delete_recipe(&self, id: u32) -> Result<bool, ApiError> {
        recipe::delete_recipe(&self.url(&format!("/recipes/{}", id))).await
    }

    async fn suggest_recipe(&self, ingredients: &[String]) -> Result<SuggestionOutcome, ApiError> {
        ai::suggest_recipe(&self.url("/ai-recipe"), ingredients).await
    }
}

/// Join a path onto the base URL, tolerating a trailing slash
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
