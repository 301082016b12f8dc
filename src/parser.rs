//! AI Suggestion Parser
//!
//! Best-effort extraction of a recipe from free-form AI text. Expects a loose
//! layout with a `Recipe Name:` line, an `Ingredients:` header and a
//! `Preparation Steps` header; anything else falls back to defaults.

use crate::models::NewRecipe;

const NAME_PREFIX: &str = "Recipe Name:";
const INGREDIENTS_HEADER: &str = "Ingredients:";
const STEPS_HEADER: &str = "Preparation Steps";

pub const DEFAULT_NAME: &str = "AI Suggestion";
pub const DEFAULT_INGREDIENT: &str = "As per suggestion";

#[derive(Clone, Copy, PartialEq)]
enum Section {
    None,
    Ingredients,
    Steps,
}

/// Parse suggestion text into a recipe candidate. Never fails.
pub fn parse_suggestion(text: &str) -> NewRecipe {
    let mut name = DEFAULT_NAME.to_string();
    let mut ingredients = Vec::new();
    let mut steps = String::new();
    let mut section = Section::None;

    for line in text.split('\n') {
        if let Some(rest) = line.strip_prefix(NAME_PREFIX) {
            name = rest.trim().to_string();
        } else if line.starts_with(INGREDIENTS_HEADER) {
            section = Section::Ingredients;
        } else if line.starts_with(STEPS_HEADER) {
            section = Section::Steps;
        } else if !line.trim().is_empty() {
            match section {
                Section::Ingredients => {
                    let entry = line.strip_prefix("- ").unwrap_or(line);
                    ingredients.push(entry.trim().to_string());
                }
                Section::Steps => {
                    steps.push_str(line.trim());
                    steps.push(' ');
                }
                Section::None => {}
            }
        }
    }

    if ingredients.is_empty() {
        ingredients.push(DEFAULT_INGREDIENT.to_string());
    }
    if steps.is_empty() {
        steps = text.to_string();
    }

    NewRecipe { name, ingredients, steps }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structured_suggestion() {
        let text = "Recipe Name: Pasta\nIngredients:\n- Tomato\n- Basil\nPreparation Steps\nBoil water.\nAdd pasta.";
        let recipe = parse_suggestion(text);
        assert_eq!(recipe.name, "Pasta");
        assert_eq!(recipe.ingredients, vec!["Tomato", "Basil"]);
        assert_eq!(recipe.steps, "Boil water. Add pasta. ");
    }

    #[test]
    fn test_parse_without_headers_uses_defaults() {
        let text = "Just toss everything in a pan\nand hope for the best.";
        let recipe = parse_suggestion(text);
        assert_eq!(recipe.name, DEFAULT_NAME);
        assert_eq!(recipe.ingredients, vec![DEFAULT_INGREDIENT]);
        assert_eq!(recipe.steps, text);
    }

    #[test]
    fn test_parse_empty_text() {
        let recipe = parse_suggestion("");
        assert_eq!(recipe.name, DEFAULT_NAME);
        assert_eq!(recipe.ingredients, vec![DEFAULT_INGREDIENT]);
        assert_eq!(recipe.steps, "");
    }

    #[test]
    fn test_parse_skips_blank_lines_and_crlf() {
        let text = "Recipe Name:  Salad \r\n\r\nIngredients:\r\n- Lettuce\r\n\r\n  Cucumber  \r\nPreparation Steps:\r\n  Chop.  \r\n\r\nServe.\r\n";
        let recipe = parse_suggestion(text);
        assert_eq!(recipe.name, "Salad");
        assert_eq!(recipe.ingredients, vec!["Lettuce", "Cucumber"]);
        assert_eq!(recipe.steps, "Chop. Serve. ");
    }

    #[test]
    fn test_parse_only_strips_one_leading_dash() {
        let text = "Ingredients:\n- - odd\n-tight\n";
        let recipe = parse_suggestion(text);
        assert_eq!(recipe.ingredients, vec!["- odd", "-tight"]);
    }

    #[test]
    fn test_parse_steps_before_ingredients() {
        let text = "Preparation Steps\nStir.\nIngredients:\n- Sugar\nRecipe Name: Syrup";
        let recipe = parse_suggestion(text);
        assert_eq!(recipe.name, "Syrup");
        assert_eq!(recipe.ingredients, vec!["Sugar"]);
        assert_eq!(recipe.steps, "Stir. ");
    }

    #[test]
    fn test_parse_ignores_lines_before_any_section() {
        let text = "Here is an idea!\nIngredients:\n- Rice\n";
        let recipe = parse_suggestion(text);
        assert_eq!(recipe.ingredients, vec!["Rice"]);
        // no steps section, so the raw text is kept
        assert_eq!(recipe.steps, text);
    }
}
