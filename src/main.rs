//! Programa do Culto Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod date;
mod editor;
mod error;
mod logger;
mod message;
mod models;
mod persistence;
mod share;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Log config problems at the default level, then apply the configured one
    logger::init(log::LevelFilter::Info);
    let config = AppConfig::load();
    logger::init(config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
