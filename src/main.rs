//! BytWave Frontend Entry Point

mod app;
mod auth;
mod badges;
mod components;
mod config;
mod context;
mod flow;
mod format;
mod forms;
mod logging;
mod pages;
mod routes;
mod stats;
mod store;
mod table_page;
mod toast;

use app::App;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::context::Backend;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    tracing::info!(backend = %config.backend_url, "starting BytWave");

    let backend = match Backend::connect(config.backend_config()) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!(error = %e, "could not create backend client");
            return;
        }
    };

    mount_to_body(move || view! { <App backend=backend /> });
}
