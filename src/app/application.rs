//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI playground.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::config::PlaygroundConfig;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::playground::routes::Route;
use crate::theme::stylesheet::StyleSheet;

actions!(akgui, [Quit]);

/// Run the AKGUI playground
pub fn run_app(config: PlaygroundConfig, route: Route) {
    Application::new()
        .with_assets(Assets)
        .run(move |cx: &mut App| {
            // Set up action handlers
            cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
            cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

            // Quit the app when all windows are closed
            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            // Style sheet and global entities
            cx.set_global(StyleSheet::default_sheet().clone());
            let entities = AppEntities::init(&config, route, cx);
            cx.set_global(entities.clone());

            // Create main window
            let (width, height) = config.window.clamped();
            let bounds = Bounds::centered(None, gpui::size(px(width), px(height)), cx);
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from("AKGUI Playground")),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            };

            let opened = cx.open_window(window_options, |window, cx| {
                cx.new(|cx| Workspace::new(entities.clone(), window, cx))
            });
            if let Err(e) = opened {
                tracing::error!(error = %e, "Failed to open playground window");
                cx.quit();
                return;
            }

            cx.activate(true);
        });
}
