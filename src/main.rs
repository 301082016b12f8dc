#![allow(warnings)]
//! SmartCook Frontend Entry Point

mod config;
mod models;
mod api;
mod parser;
mod theme;
mod render;
mod controller;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config::LOG_LEVEL).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already initialised".into());
    }
    mount_to_body(App);
}
