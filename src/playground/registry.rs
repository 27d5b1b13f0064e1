//! DemoRegistry - Component Demo Lookup
//!
//! Maps lowercase component keys to their demo configuration. Keys keep
//! insertion order so the sidebar lists components as they were registered.

use std::sync::Arc;

use hashlink::LinkedHashMap;

use crate::playground::demos;
use crate::playground::types::ComponentConfig;

#[derive(Debug, Clone, Default)]
pub struct DemoRegistry {
    demos: LinkedHashMap<String, Arc<ComponentConfig>>,
}

impl DemoRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the demos shipped with the library
    pub fn with_builtin_demos() -> Self {
        let mut registry = Self::new();
        registry.register("button", demos::button::config());
        registry.register("card", demos::card::config());
        registry.register("appbar", demos::app_bar::config());
        registry
    }

    /// Insert or replace the config for `name` (case-insensitive)
    ///
    /// Replacing keeps the key's original position.
    pub fn register(&mut self, name: &str, config: ComponentConfig) {
        let key = name.to_lowercase();
        let config = Arc::new(config);
        match self.demos.get_mut(&key) {
            Some(existing) => *existing = config,
            None => {
                self.demos.insert(key, config);
            }
        }
    }

    pub fn get_demo_config(&self, name: &str) -> Option<Arc<ComponentConfig>> {
        self.demos.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.demos.contains_key(name)
    }

    /// Registered keys in insertion order
    pub fn available_demos(&self) -> Vec<String> {
        self.demos.keys().cloned().collect()
    }

    pub fn demo_count(&self) -> usize {
        self.demos.len()
    }

    pub fn log_status(&self) {
        tracing::info!(
            total = self.demo_count(),
            demos = %self.available_demos().join(", "),
            "Demo registry ready"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_button_card_appbar() {
        let registry = DemoRegistry::with_builtin_demos();
        assert_eq!(registry.available_demos(), vec!["button", "card", "appbar"]);
        assert_eq!(registry.demo_count(), 3);

        let button = registry.get_demo_config("button");
        assert_eq!(button.map(|c| c.name.to_string()), Some("Button".to_string()));
        assert!(registry.get_demo_config("unknown").is_none());
    }

    #[test]
    fn register_lowercases_keys() {
        let mut registry = DemoRegistry::new();
        registry.register("Input", ComponentConfig::new("Input", "Text fields", "inputs"));
        assert!(registry.contains("input"));
        assert!(registry.get_demo_config("Input").is_none());
    }

    #[test]
    fn registering_twice_keeps_one_entry_with_second_config() {
        let mut registry = DemoRegistry::new();
        registry.register("badge", ComponentConfig::new("Badge", "first", "display"));
        registry.register("BADGE", ComponentConfig::new("Badge", "second", "display"));

        assert_eq!(registry.demo_count(), 1);
        let config = registry.get_demo_config("badge");
        assert_eq!(
            config.map(|c| c.description.to_string()),
            Some("second".to_string())
        );
    }

    #[test]
    fn replacement_keeps_position() {
        let mut registry = DemoRegistry::with_builtin_demos();
        registry.register("button", ComponentConfig::new("Button", "override", "inputs"));
        assert_eq!(registry.available_demos(), vec!["button", "card", "appbar"]);
    }
}
