//! ToDo Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dialog;
mod logger;
mod models;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logger::init(config.log_level);
    log::info!("starting, API at {}", config.api_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
