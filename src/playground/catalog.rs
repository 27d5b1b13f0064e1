//! Catalog - Sidebar Component Listing
//!
//! Joins the registry keys with static display metadata. Components known to
//! the catalog but not yet registered are listed as well and resolve to an
//! "under development" page.

use gpui::SharedString;

use crate::playground::registry::DemoRegistry;
use crate::playground::types::ComponentInfo;

/// Static display metadata: key, name, description, category
const COMPONENT_INFO: &[(&str, &str, &str, &str)] = &[
    (
        "button",
        "Button",
        "Interactive buttons with multiple variants and states",
        "inputs",
    ),
    (
        "input",
        "Input",
        "Text input fields with validation and different types",
        "inputs",
    ),
    (
        "card",
        "Card",
        "Content containers with flexible layouts",
        "layout",
    ),
    (
        "appbar",
        "AppBar",
        "Responsive navigation bar with branding, menu and actions",
        "navigation",
    ),
];

const FALLBACK_CATEGORY: &str = "components";

fn static_info(key: &str) -> Option<ComponentInfo> {
    COMPONENT_INFO
        .iter()
        .find(|(info_key, ..)| *info_key == key)
        .map(|(key, name, description, category)| ComponentInfo {
            name: SharedString::from(*name),
            path: SharedString::from(format!("/{key}")),
            description: SharedString::from(*description),
            category: SharedString::from(*category),
        })
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Info for a key, falling back to generated metadata
pub fn component_info(key: &str) -> ComponentInfo {
    static_info(key).unwrap_or_else(|| ComponentInfo {
        name: SharedString::from(capitalize(key)),
        path: SharedString::from(format!("/{key}")),
        description: SharedString::from(format!(
            "A versatile {key} component with multiple variants and states."
        )),
        category: SharedString::from(FALLBACK_CATEGORY),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    components: Vec<ComponentInfo>,
}

impl Catalog {
    /// Registered components in registry order, then unregistered static entries
    pub fn from_registry(registry: &DemoRegistry) -> Self {
        let mut components: Vec<ComponentInfo> = registry
            .available_demos()
            .iter()
            .map(|key| component_info(key))
            .collect();

        for (key, ..) in COMPONENT_INFO {
            if !registry.contains(key) {
                if let Some(info) = static_info(key) {
                    components.push(info);
                }
            }
        }

        Self { components }
    }

    pub fn components(&self) -> &[ComponentInfo] {
        &self.components
    }

    pub fn by_path(&self, path: &str) -> Option<&ComponentInfo> {
        self.components.iter().find(|info| info.path.as_str() == path)
    }

    pub fn by_key(&self, key: &str) -> Option<&ComponentInfo> {
        self.components.iter().find(|info| info.key() == key)
    }

    pub fn by_category(&self, category: &str) -> Vec<&ComponentInfo> {
        self.components
            .iter()
            .filter(|info| info.category.as_str() == category)
            .collect()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<SharedString> {
        let mut categories: Vec<SharedString> = Vec::new();
        for info in &self.components {
            if !categories.contains(&info.category) {
                categories.push(info.category.clone());
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::types::ComponentConfig;

    #[test]
    fn builtin_catalog_order() {
        let catalog = Catalog::from_registry(&DemoRegistry::with_builtin_demos());
        let keys: Vec<_> = catalog.components().iter().map(|c| c.key().to_string()).collect();
        assert_eq!(keys, vec!["button", "card", "appbar", "input"]);
    }

    #[test]
    fn unknown_keys_get_fallback_info() {
        let mut registry = DemoRegistry::new();
        registry.register("tooltip", ComponentConfig::new("Tooltip", "", "overlay"));
        let catalog = Catalog::from_registry(&registry);

        let info = catalog.by_path("/tooltip");
        assert_eq!(
            info.cloned(),
            Some(ComponentInfo {
                name: "Tooltip".into(),
                path: "/tooltip".into(),
                description: "A versatile tooltip component with multiple variants and states."
                    .into(),
                category: "components".into(),
            })
        );
    }

    #[test]
    fn lookups_by_category() {
        let catalog = Catalog::from_registry(&DemoRegistry::with_builtin_demos());
        let inputs: Vec<_> = catalog
            .by_category("inputs")
            .iter()
            .map(|c| c.name.to_string())
            .collect();
        assert_eq!(inputs, vec!["Button", "Input"]);
        assert_eq!(
            catalog.categories(),
            vec![
                SharedString::from("inputs"),
                SharedString::from("layout"),
                SharedString::from("navigation"),
            ]
        );
    }

    #[test]
    fn missing_path_is_none() {
        let catalog = Catalog::from_registry(&DemoRegistry::with_builtin_demos());
        assert!(catalog.by_path("/missing").is_none());
        assert!(catalog.by_key("input").is_some());
    }
}
