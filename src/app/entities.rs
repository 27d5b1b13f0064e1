//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: the viewport changes on every resize,
//! navigation on clicks, the registry only at startup.

use gpui::{App, AppContext, Entity, Global};

use crate::config::PlaygroundConfig;
use crate::playground::registry::DemoRegistry;
use crate::playground::routes::Route;
use crate::state::{layout_state::LayoutState, navigation_state::NavigationState};
use crate::viewport::{Breakpoint, Viewport};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Current window width
    pub viewport: Entity<Viewport>,
    /// Component demos by key
    pub registry: Entity<DemoRegistry>,
    /// Active route
    pub navigation: Entity<NavigationState>,
    /// Sidebar visibility
    pub layout: Entity<LayoutState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded config
    pub fn init(config: &PlaygroundConfig, route: Route, cx: &mut App) -> Self {
        let registry = DemoRegistry::with_builtin_demos();
        registry.log_status();

        Self {
            viewport: cx.new(|_| Viewport::new(config.window.width)),
            registry: cx.new(|_| registry),
            navigation: cx.new(|_| NavigationState::new(route)),
            layout: cx.new(|_| LayoutState::new(Breakpoint(config.mobile_breakpoint))),
        }
    }
}
