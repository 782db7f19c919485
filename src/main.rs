mod api;
mod app;
mod catalog;
mod components;
mod config;
mod error;
mod logging;
mod models;
mod pages;
mod profile;
mod request;

use leptos::prelude::*;

use app::App;
use config::AppConfig;

fn main() {
    let loaded = AppConfig::from_build_env();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(config.log_level);
    if let Err(e) = loaded {
        tracing::warn!("Falling back to default configuration: {}", e);
    }
    tracing::info!("EcoPoint client starting, API at {}", config.api_base);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
