//! AI Suggestion Endpoint
//!
//! `POST /ai-recipe`. Success is decided by HTTP status alone; a failing
//! status surfaces the server's `detail` text when the body carries one.

use gloo_net::http::Request;

use super::ApiError;
use crate::config::MSG_GENERIC_FAILURE;
use crate::models::{ErrorResponse, SuggestRequest, SuggestResponse, SuggestionOutcome};

pub async fn suggest_recipe(url: &str, ingredients: &[String]) -> Result<SuggestionOutcome, ApiError> {
    let resp = Request::post(url)
        .json(&SuggestRequest { ingredients })?
        .send()
        .await?;

    if resp.ok() {
        let body: SuggestResponse = resp.json().await?;
        return Ok(SuggestionOutcome::Suggestion(body.suggestion));
    }

    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("[API] AI suggestion failed with status {}", status);
    Ok(outcome_from_error_body(&body))
}

/// Build the failure outcome from a non-OK response body
pub fn outcome_from_error_body(body: &str) -> SuggestionOutcome {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.detail)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| MSG_GENERIC_FAILURE.to_string());
    SuggestionOutcome::Failed(detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_with_detail() {
        assert_eq!(
            outcome_from_error_body(r#"{"detail":"API key missing"}"#),
            SuggestionOutcome::Failed("API key missing".to_string())
        );
    }

    #[test]
    fn test_error_body_without_detail() {
        assert_eq!(
            outcome_from_error_body(r#"{"error":"boom"}"#),
            SuggestionOutcome::Failed(MSG_GENERIC_FAILURE.to_string())
        );
    }

    #[test]
    fn test_error_body_not_json() {
        assert_eq!(
            outcome_from_error_body("<html>502 Bad Gateway</html>"),
            SuggestionOutcome::Failed(MSG_GENERIC_FAILURE.to_string())
        );
    }

    #[test]
    fn test_suggest_request_shape() {
        let ingredients = vec!["egg".to_string(), "rice".to_string()];
        let body = serde_json::to_string(&SuggestRequest { ingredients: &ingredients }).unwrap();
        assert_eq!(body, r#"{"ingredients":["egg","rice"]}"#);
    }
}
