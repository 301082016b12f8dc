//! Build-time Configuration
//!
//! Constants baked into the bundle. The API base URL can be overridden at
//! compile time through `SMARTCOOK_API_URL`.

const DEFAULT_API_BASE_URL: &str = "https://smartcook-bac-production.up.railway.app";

/// Base URL of the recipe backend
pub const API_BASE_URL: &str = match option_env!("SMARTCOOK_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

/// localStorage key holding "dark" or "light"
pub const THEME_STORAGE_KEY: &str = "theme";

/// Console log level
pub const LOG_LEVEL: log::Level = log::Level::Info;

// ========================
// User-facing Messages
// ========================

pub const MSG_BACKEND_UNREACHABLE: &str = "Could not connect to the backend server.";
pub const MSG_BACKEND_DOWN: &str = "Error: Backend server is not running.";
pub const MSG_NO_RECIPES: &str = "No recipes added yet. Start by adding one!";
pub const MSG_CONFIRM_DELETE: &str = "Are you sure you want to delete this recipe?";
pub const MSG_SAVED: &str = "Recipe saved to your collection!";
pub const MSG_SAVE_FAILED: &str = "Failed to save recipe.";
pub const MSG_GENERIC_FAILURE: &str = "Something went wrong";

// ========================
// Button Labels
// ========================

pub const LABEL_SUGGEST: &str = "Magic ✨";
pub const LABEL_THINKING: &str = "Thinking...";
