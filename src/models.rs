//! Frontend Models
//!
//! Data structures matching the recipe backend.

use reactive_stores::Store;
use serde::{Deserialize, Serialize};

/// Recipe data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: String,
}

/// Body of `POST /recipes`. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: String,
}

/// Result of asking the AI endpoint for a recipe
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// 2xx: free-form suggestion text
    Suggestion(String),
    /// Non-OK: server-provided detail or a generic message
    Failed(String),
}

/// Manual entry form contents
#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct RecipeForm {
    pub name: String,
    /// Comma-separated
    pub ingredients: String,
    pub steps: String,
}

impl RecipeForm {
    pub fn to_new_recipe(&self) -> NewRecipe {
        NewRecipe {
            name: self.name.clone(),
            ingredients: split_ingredients(&self.ingredients),
            steps: self.steps.clone(),
        }
    }
}

/// Split a comma-separated ingredient field, trimming each entry
pub fn split_ingredients(input: &str) -> Vec<String> {
    input.split(',').map(|i| i.trim().to_string()).collect()
}

// ========================
// Wire Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct SuggestRequest<'a> {
    pub ingredients: &'a [String],
}

#[derive(Debug, Deserialize)]
pub struct SuggestResponse {
    pub suggestion: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ingredients_trims() {
        assert_eq!(
            split_ingredients(" eggs,flour ,  milk"),
            vec!["eggs", "flour", "milk"]
        );
    }

    #[test]
    fn test_form_to_new_recipe() {
        let form = RecipeForm {
            name: "Pancakes".to_string(),
            ingredients: "eggs, flour".to_string(),
            steps: "Mix and fry.".to_string(),
        };
        let recipe = form.to_new_recipe();
        assert_eq!(recipe.name, "Pancakes");
        assert_eq!(recipe.ingredients, vec!["eggs", "flour"]);
        assert_eq!(recipe.steps, "Mix and fry.");
    }

    #[test]
    fn test_recipe_deserializes_from_backend_json() {
        let json = r#"[{"id":7,"name":"Soup","ingredients":["water","salt"],"steps":"Boil."}]"#;
        let recipes: Vec<Recipe> = serde_json::from_str(json).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, 7);
        assert_eq!(recipes[0].ingredients, vec!["water", "salt"]);
    }

    #[test]
    fn test_new_recipe_has_no_id_field() {
        let body = serde_json::to_value(NewRecipe {
            name: "Toast".to_string(),
            ingredients: vec!["bread".to_string()],
            steps: "Toast it.".to_string(),
        })
        .unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["ingredients"][0], "bread");
    }

    #[test]
    fn test_error_response_detail_optional() {
        let parsed: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.detail.is_none());
        let parsed: ErrorResponse = serde_json::from_str(r#"{"detail":"API key missing"}"#).unwrap();
        assert_eq!(parsed.detail.as_deref(), Some("API key missing"));
    }
}
