//! App Controller
//!
//! Command/handler table between the UI and the backend. Components send a
//! [`Command`]; the controller talks to the API, the parser and the theme
//! manager, and emits [`Update`]s that the store applies in order.

use std::cell::RefCell;

use crate::api::RecipeApi;
use crate::config::{MSG_BACKEND_UNREACHABLE, MSG_CONFIRM_DELETE, MSG_SAVED, MSG_SAVE_FAILED};
use crate::models::{split_ingredients, Recipe, RecipeForm, SuggestionOutcome};
use crate::parser::parse_suggestion;
use crate::theme::{Theme, ThemeManager, ThemeStorage};

/// User intents
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Page load: apply theme, fetch list
    Init,
    Refresh,
    AddRecipe(RecipeForm),
    /// Raw comma-separated ingredient input
    Suggest(String),
    /// Raw suggestion text to parse and save
    SaveSuggestion(String),
    Delete(u32),
    ToggleTheme,
}

/// State changes for the store
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Recipes(Vec<Recipe>),
    LoadFailed,
    ResetForm,
    Suggesting(bool),
    Suggestion(SuggestionOutcome),
    HideSuggestion,
    Theme(Theme),
}

/// Blocking user dialogs
pub trait Notifier {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Re-enables the suggest button however the request ends
struct SuggestingGuard<'a> {
    emit: &'a dyn Fn(Update),
}

impl<'a> SuggestingGuard<'a> {
    fn start(emit: &'a dyn Fn(Update)) -> Self {
        emit(Update::Suggesting(true));
        Self { emit }
    }
}

impl Drop for SuggestingGuard<'_> {
    fn drop(&mut self) {
        (self.emit)(Update::Suggesting(false));
    }
}

pub struct AppController<A: RecipeApi, N: Notifier, S: ThemeStorage> {
    api: A,
    notifier: N,
    theme: RefCell<ThemeManager<S>>,
}

impl<A: RecipeApi, N: Notifier, S: ThemeStorage> AppController<A, N, S> {
    pub fn new(api: A, notifier: N, theme: ThemeManager<S>) -> Self {
        Self {
            api,
            notifier,
            theme: RefCell::new(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.borrow().current()
    }

    /// Run the handler for `command`
    pub async fn dispatch(&self, command: Command, emit: &dyn Fn(Update)) {
        match command {
            Command::Init => {
                emit(Update::Theme(self.theme()));
                self.refresh(emit).await;
            }
            Command::Refresh => self.refresh(emit).await,
            Command::AddRecipe(form) => self.add_recipe(form, emit).await,
            Command::Suggest(input) => self.suggest(input, emit).await,
            Command::SaveSuggestion(text) => self.save_suggestion(text, emit).await,
            Command::Delete(id) => self.delete(id, emit).await,
            Command::ToggleTheme => {
                let theme = self.theme.borrow_mut().toggle();
                log::info!("[THEME] Switched to {}", theme.as_str());
                emit(Update::Theme(theme));
            }
        }
    }

    async fn refresh(&self, emit: &dyn Fn(Update)) {
        match self.api.list_recipes().await {
            Ok(recipes) => {
                log::info!("[APP] Loaded {} recipes", recipes.len());
                emit(Update::Recipes(recipes));
            }
            Err(e) => {
                log::error!("[APP] Error fetching recipes: {}", e);
                emit(Update::LoadFailed);
            }
        }
    }

    async fn add_recipe(&self, form: RecipeForm, emit: &dyn Fn(Update)) {
        let recipe = form.to_new_recipe();
        match self.api.create_recipe(&recipe).await {
            Ok(true) => {
                emit(Update::ResetForm);
                self.refresh(emit).await;
            }
            Ok(false) => {}
            Err(e) => {
                log::error!("[APP] Error adding recipe: {}", e);
                self.notifier.alert(MSG_BACKEND_UNREACHABLE);
            }
        }
    }

    async fn suggest(&self, input: String, emit: &dyn Fn(Update)) {
        if input.is_empty() {
            return;
        }
        let ingredients = split_ingredients(&input);

        let _busy = SuggestingGuard::start(emit);
        match self.api.suggest_recipe(&ingredients).await {
            Ok(outcome) => emit(Update::Suggestion(outcome)),
            Err(e) => {
                log::error!("[APP] Error getting AI suggestion: {}", e);
                self.notifier.alert(MSG_BACKEND_UNREACHABLE);
            }
        }
    }

    async fn save_suggestion(&self, text: String, emit: &dyn Fn(Update)) {
        let recipe = parse_suggestion(&text);
        match self.api.create_recipe(&recipe).await {
            Ok(true) => {
                self.notifier.alert(MSG_SAVED);
                emit(Update::HideSuggestion);
                self.refresh(emit).await;
            }
            Ok(false) => {}
            Err(e) => {
                log::error!("[APP] Error saving AI recipe: {}", e);
                self.notifier.alert(MSG_SAVE_FAILED);
            }
        }
    }

    async fn delete(&self, id: u32, emit: &dyn Fn(Update)) {
        if !self.notifier.confirm(MSG_CONFIRM_DELETE) {
            return;
        }
        match self.api.delete_recipe(id).await {
            Ok(true) => self.refresh(emit).await,
            Ok(false) => {}
            Err(e) => {
                log::error!("[APP] Error deleting recipe {}: {}", id, e);
                self.notifier.alert(MSG_BACKEND_UNREACHABLE);
            }
        }
    }
}
