//! Playground Types
//!
//! Declarative demo descriptions consumed by the generic demo view.

use gpui::SharedString;

use crate::playground::demo_element::DemoElement;

/// Everything the playground knows about one component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentConfig {
    pub name: SharedString,
    pub description: SharedString,
    pub category: SharedString,
    pub examples: Vec<ComponentExample>,
    pub documentation: Option<ComponentDocumentation>,
}

impl ComponentConfig {
    pub fn new(
        name: impl Into<SharedString>,
        description: impl Into<SharedString>,
        category: impl Into<SharedString>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            examples: Vec::new(),
            documentation: None,
        }
    }

    pub fn example(mut self, example: ComponentExample) -> Self {
        self.examples.push(example);
        self
    }

    pub fn documentation(mut self, documentation: ComponentDocumentation) -> Self {
        self.documentation = Some(documentation);
        self
    }
}

/// A live example with the source shown next to it
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentExample {
    pub title: SharedString,
    pub description: Option<SharedString>,
    pub component: DemoElement,
    pub code: String,
}

impl ComponentExample {
    /// Build an example whose code is generated from the element
    pub fn new(title: impl Into<SharedString>, component: DemoElement) -> Self {
        let code = component.to_snippet();
        Self {
            title: title.into(),
            description: None,
            component,
            code,
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One row of the props table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentProp {
    pub name: SharedString,
    /// Free-form type description
    pub ty: SharedString,
    pub required: bool,
    pub default: Option<SharedString>,
    pub description: SharedString,
}

impl ComponentProp {
    pub fn new(
        name: impl Into<SharedString>,
        ty: impl Into<SharedString>,
        description: impl Into<SharedString>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: false,
            default: None,
            description: description.into(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, default: impl Into<SharedString>) -> Self {
        self.default = Some(default.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancedExample {
    pub title: SharedString,
    pub code: String,
    pub description: Option<SharedString>,
}

impl AdvancedExample {
    pub fn new(title: impl Into<SharedString>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Usage {
    pub installation: Option<String>,
    pub basic_example: String,
    pub advanced_examples: Vec<AdvancedExample>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDocumentation {
    pub description: SharedString,
    pub props: Vec<ComponentProp>,
    pub usage: Usage,
}

/// Route metadata for the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
    pub name: SharedString,
    pub path: SharedString,
    pub description: SharedString,
    pub category: SharedString,
}

impl ComponentInfo {
    /// Registry key derived from the path
    pub fn key(&self) -> &str {
        self.path.trim_start_matches('/')
    }
}
