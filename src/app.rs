//! SmartCook Frontend App
//!
//! Root component: builds the controller, provides store and context, and
//! lays out the header, forms and recipe list.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpRecipeApi;
use crate::components::{AiPanel, Header, RecipeEntryForm, RecipeList};
use crate::config::API_BASE_URL;
use crate::context::AppContext;
use crate::controller::{AppController, BrowserNotifier, Command};
use crate::store::{apply_update, AppState};
use crate::theme::{LocalThemeStorage, ThemeManager};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let controller = StoredValue::new_local(Rc::new(AppController::new(
        HttpRecipeApi::new(API_BASE_URL),
        BrowserNotifier,
        ThemeManager::init(LocalThemeStorage::new()),
    )));

    // Each command runs as its own task; overlapping refreshes land in completion order
    let dispatch = Callback::new(move |command: Command| {
        let controller = controller.get_value();
        log::debug!("[APP] Dispatch {:?}", command);
        spawn_local(async move {
            let emit = move |update| apply_update(store, update);
            controller.dispatch(command, &emit).await;
        });
    });
    let ctx = AppContext::new(dispatch);
    provide_context(ctx);

    // Page load
    Effect::new(move |_| {
        ctx.send(Command::Init);
    });

    view! {
        <div class="container">
            <Header />

            <main class="main-content">
                <section class="forms-column">
                    <RecipeEntryForm />
                    <AiPanel />
                </section>

                <section class="recipes-column">
                    <h2>"My Recipes"</h2>
                    <RecipeList />
                </section>
            </main>
        </div>
    }
}
