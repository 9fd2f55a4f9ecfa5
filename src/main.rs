mod app;
mod components;
mod island;
mod state;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use island::{AppConfig, IslandClient, SharedIslandApi, load_or_init_config};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("island_console=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let config = match load_or_init_config() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "failed to load config, using defaults");
            AppConfig::default()
        }
    };

    let client = match IslandClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, server_url = %config.server_url, "cannot create island client");
            std::process::exit(1);
        }
    };
    info!(server_url = %client.base_url(), "using island");
    let api: SharedIslandApi = Arc::new(client);

    let size = config.window.clamped();
    let window_builder = WindowBuilder::new()
        .with_title("Island Console")
        .with_inner_size(LogicalSize::new(size.width as f64, size.height as f64))
        .with_min_inner_size(LogicalSize::new(
            island::config::WindowSize::MIN_WIDTH as f64,
            island::config::WindowSize::MIN_HEIGHT as f64,
        ));

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::new()
                .with_menu(None)
                .with_window(window_builder),
        )
        .with_context(config)
        .with_context(api)
        .launch(app::App);
}
