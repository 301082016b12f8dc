//! Recipe Endpoints
//!
//! `GET /recipes`, `POST /recipes`, `DELETE /recipes/{id}`.

use gloo_net::http::Request;

use super::ApiError;
use crate::models::{NewRecipe, Recipe};

pub async fn list_recipes(url: &str) -> Result<Vec<Recipe>, ApiError> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let recipes: Vec<Recipe> = resp.json().await?;
    log::debug!("[API] Loaded {} recipes", recipes.len());
    Ok(recipes)
}

pub async fn create_recipe(url: &str, recipe: &NewRecipe) -> Result<bool, ApiError> {
    let resp = Request::post(url).json(recipe)?.send().await?;
    if !resp.ok() {
        log::warn!("[API] Create '{}' rejected with status {}", recipe.name, resp.status());
    }
    Ok(resp.ok())
}

pub async fn delete_recipe(url: &str) -> Result<bool, ApiError> {
    let resp = Request::delete(url).send().await?;
    if !resp.ok() {
        log::warn!("[API] Delete {} rejected with status {}", url, resp.status());
    }
    Ok(resp.ok())
}
