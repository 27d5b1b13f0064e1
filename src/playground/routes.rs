//! Routes - Playground Path Parsing and Page Resolution

use std::fmt;
use std::sync::Arc;

use gpui::SharedString;

use crate::playground::catalog::Catalog;
use crate::playground::registry::DemoRegistry;
use crate::playground::types::{ComponentConfig, ComponentInfo};

/// A parsed playground path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Overview,
    /// `/:component`, key lowercased
    Component(SharedString),
    /// Anything with more than one segment
    NotFound(SharedString),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Overview,
            [component] => Route::Component(SharedString::from(component.to_lowercase())),
            _ => Route::NotFound(SharedString::from(trimmed.to_string())),
        }
    }

    pub fn component(key: impl Into<SharedString>) -> Self {
        Route::Component(key.into())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Overview => "/".to_string(),
            Route::Component(key) => format!("/{key}"),
            Route::NotFound(path) => path.to_string(),
        }
    }

    pub fn is_component(&self, key: &str) -> bool {
        matches!(self, Route::Component(current) if current.as_str() == key)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// What the main content area shows for a route
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home,
    /// No catalog entry for the key
    ComponentNotFound(SharedString),
    /// Catalog entry without a registered demo
    UnderDevelopment(ComponentInfo),
    Demo(Arc<ComponentConfig>),
    PageNotFound(SharedString),
}

impl Page {
    pub fn resolve(route: &Route, catalog: &Catalog, registry: &DemoRegistry) -> Self {
        match route {
            Route::Overview => Page::Home,
            Route::NotFound(path) => Page::PageNotFound(path.clone()),
            Route::Component(key) => match catalog.by_key(key) {
                None => Page::ComponentNotFound(key.clone()),
                Some(info) => match registry.get_demo_config(key) {
                    Some(config) => Page::Demo(config),
                    None => Page::UnderDevelopment(info.clone()),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_paths() {
        assert_eq!(Route::parse("/"), Route::Overview);
        assert_eq!(Route::parse(""), Route::Overview);
        assert_eq!(Route::parse("/Button"), Route::component("button"));
        assert_eq!(Route::parse("card/"), Route::component("card"));
        assert_eq!(
            Route::parse("/button/extra"),
            Route::NotFound("/button/extra".into())
        );
    }

    #[test]
    fn path_round_trips_for_components() {
        assert_eq!(Route::component("appbar").path(), "/appbar");
        assert_eq!(Route::Overview.to_string(), "/");
    }

    #[test]
    fn resolve_pages() {
        let registry = DemoRegistry::with_builtin_demos();
        let catalog = Catalog::from_registry(&registry);
        let resolve = |path: &str| Page::resolve(&Route::parse(path), &catalog, &registry);

        assert_eq!(resolve("/"), Page::Home);
        assert!(matches!(resolve("/button"), Page::Demo(config) if config.name.as_str() == "Button"));
        assert!(matches!(resolve("/input"), Page::UnderDevelopment(info) if info.category.as_str() == "inputs"));
        assert_eq!(
            resolve("/slider"),
            Page::ComponentNotFound("slider".into())
        );
        assert_eq!(resolve("/a/b"), Page::PageNotFound("/a/b".into()));
    }
}
