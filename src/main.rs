//! AKGUI Playground - Main Entry Point
//!
//! Usage: `akgui-playground [ROUTE]`, e.g. `akgui-playground /card`.

use akgui::app::application::run_app;
use akgui::config::PlaygroundConfig;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!(version = akgui::VERSION, "Starting AKGUI Playground...");

    let config = PlaygroundConfig::try_load().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Using default playground config");
        PlaygroundConfig::default()
    });
    let route_arg = std::env::args().nth(1);
    let route = config.startup_route(route_arg.as_deref());

    // Run the GPUI application
    run_app(config, route);
}
