//! NavigationState - Current Playground Route

use crate::playground::routes::Route;

/// State for route navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    route: Route,
}

impl NavigationState {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Switch to `route`, returning whether it differs from the current one
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.route == route {
            return false;
        }
        tracing::info!(from = %self.route, to = %route, "Navigating");
        self.route = route;
        true
    }

    /// Parse and switch to a path
    pub fn navigate_to_path(&mut self, path: &str) -> bool {
        self.navigate(Route::parse(path))
    }

    pub fn is_overview(&self) -> bool {
        self.route == Route::Overview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_overview() {
        assert!(NavigationState::default().is_overview());
    }

    #[test]
    fn navigate_reports_changes() {
        let mut state = NavigationState::default();
        assert!(state.navigate(Route::component("button")));
        assert!(!state.navigate(Route::component("button")));
        assert!(state.route().is_component("button"));
    }

    #[test]
    fn paths_are_parsed() {
        let mut state = NavigationState::default();
        assert!(state.navigate_to_path("/Card"));
        assert_eq!(state.route(), &Route::component("card"));
        assert!(state.navigate_to_path("/"));
        assert!(state.is_overview());
    }
}
