//! Application Context
//!
//! Command dispatch provided via Leptos Context API.

use leptos::prelude::*;

use crate::controller::Command;

/// App-wide dispatch handle
#[derive(Clone, Copy)]
pub struct AppContext {
    dispatch: Callback<Command>,
}

impl AppContext {
    pub fn new(dispatch: Callback<Command>) -> Self {
        Self { dispatch }
    }

    /// Hand a command to the controller
    pub fn send(&self, command: Command) {
        self.dispatch.run(command);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
