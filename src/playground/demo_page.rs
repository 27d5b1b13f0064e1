//! Demo Page Model
//!
//! The tab and documentation layout a component config produces, kept free
//! of GPUI so it can be checked directly.

use gpui::SharedString;

use crate::playground::types::{AdvancedExample, ComponentConfig, ComponentDocumentation, ComponentProp};

pub const EXAMPLES_TAB: &str = "examples";
pub const DOCUMENTATION_TAB: &str = "documentation";

/// Placeholder shown for props without a default
pub const NO_DEFAULT: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub id: &'static str,
    pub label: &'static str,
}

/// Tabs for a config: examples always, documentation when present
pub fn tabs_for(config: &ComponentConfig) -> Vec<TabSpec> {
    let mut tabs = vec![TabSpec {
        id: EXAMPLES_TAB,
        label: "Examples",
    }];
    if config.documentation.is_some() {
        tabs.push(TabSpec {
            id: DOCUMENTATION_TAB,
            label: "Documentation",
        });
    }
    tabs
}

/// A props table row ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropRow {
    pub name: SharedString,
    pub required: bool,
    pub ty: SharedString,
    pub default: SharedString,
    pub description: SharedString,
}

impl From<&ComponentProp> for PropRow {
    fn from(prop: &ComponentProp) -> Self {
        Self {
            name: prop.name.clone(),
            required: prop.required,
            ty: prop.ty.clone(),
            default: prop
                .default
                .clone()
                .unwrap_or_else(|| SharedString::from(NO_DEFAULT)),
            description: prop.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocSection {
    Overview(SharedString),
    Installation(String),
    BasicUsage(String),
    Props(Vec<PropRow>),
    AdvancedUsage(Vec<AdvancedExample>),
}

impl DocSection {
    pub fn heading(&self) -> &'static str {
        match self {
            DocSection::Overview(_) => "Overview",
            DocSection::Installation(_) => "Installation",
            DocSection::BasicUsage(_) => "Basic Usage",
            DocSection::Props(_) => "Props",
            DocSection::AdvancedUsage(_) => "Advanced Usage",
        }
    }
}

/// Documentation sections in display order, skipping absent optional parts
pub fn doc_sections(doc: &ComponentDocumentation) -> Vec<DocSection> {
    let mut sections = vec![DocSection::Overview(doc.description.clone())];
    if let Some(installation) = &doc.usage.installation {
        sections.push(DocSection::Installation(installation.clone()));
    }
    sections.push(DocSection::BasicUsage(doc.usage.basic_example.clone()));
    sections.push(DocSection::Props(doc.props.iter().map(PropRow::from).collect()));
    if !doc.usage.advanced_examples.is_empty() {
        sections.push(DocSection::AdvancedUsage(doc.usage.advanced_examples.clone()));
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::types::Usage;

    fn documentation(installation: Option<&str>, advanced: usize) -> ComponentDocumentation {
        ComponentDocumentation {
            description: "Docs".into(),
            props: vec![
                ComponentProp::new("label", "SharedString", "Text").required(),
                ComponentProp::new("variant", "ButtonVariant", "Style").default_value("Primary"),
            ],
            usage: Usage {
                installation: installation.map(str::to_string),
                basic_example: "Button::new(\"a\", \"A\")".to_string(),
                advanced_examples: (0..advanced)
                    .map(|ix| AdvancedExample::new(format!("Advanced {ix}"), "code"))
                    .collect(),
            },
        }
    }

    #[test]
    fn documentation_tab_only_when_documented() {
        let config = ComponentConfig::new("X", "x", "misc");
        let ids: Vec<_> = tabs_for(&config).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![EXAMPLES_TAB]);

        let documented = config.documentation(documentation(None, 0));
        let ids: Vec<_> = tabs_for(&documented).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![EXAMPLES_TAB, DOCUMENTATION_TAB]);
    }

    #[test]
    fn optional_sections_are_skipped() {
        let headings: Vec<_> = doc_sections(&documentation(None, 0))
            .iter()
            .map(DocSection::heading)
            .collect();
        assert_eq!(headings, vec!["Overview", "Basic Usage", "Props"]);

        let headings: Vec<_> = doc_sections(&documentation(Some("cargo add akgui"), 2))
            .iter()
            .map(DocSection::heading)
            .collect();
        assert_eq!(
            headings,
            vec!["Overview", "Installation", "Basic Usage", "Props", "Advanced Usage"]
        );
    }

    #[test]
    fn prop_rows_fill_missing_default() {
        let sections = doc_sections(&documentation(None, 0));
        let Some(DocSection::Props(rows)) = sections.iter().find(|s| s.heading() == "Props") else {
            panic!("props section missing");
        };
        assert!(rows[0].required);
        assert_eq!(rows[0].default.to_string(), NO_DEFAULT);
        assert_eq!(rows[1].default.to_string(), "Primary");
    }
}
