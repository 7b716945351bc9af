//! Storefront Dashboard Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod filters;
mod format;
mod logging;
mod models;
mod store;
mod sync;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
