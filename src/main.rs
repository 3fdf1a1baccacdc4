//! Upvote Lists Frontend Entry Point

mod models;
mod config;
mod logging;
mod debounce;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

use crate::config::StoreConfig;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(StoreConfig::default().log_level);
    mount_to_body(App);
}
