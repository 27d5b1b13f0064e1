//! Component Tabs
//!
//! Tab selection state plus the tab header element.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::playground::demo_page::TabSpec;
use crate::theme::colors::AkColors;
use crate::theme::typography::Typography;

/// Which tab is active among a fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    tabs: Vec<TabSpec>,
    active: &'static str,
}

impl TabSelection {
    /// Start on `default_tab` when it exists, else on the first tab
    pub fn new(tabs: Vec<TabSpec>, default_tab: &str) -> Self {
        let active = tabs
            .iter()
            .find(|tab| tab.id == default_tab)
            .or_else(|| tabs.first())
            .map(|tab| tab.id)
            .unwrap_or_default();
        Self { tabs, active }
    }

    pub fn tabs(&self) -> &[TabSpec] {
        &self.tabs
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Activate a tab; unknown ids are ignored
    pub fn select(&mut self, id: &str) -> bool {
        match self.tabs.iter().find(|tab| tab.id == id) {
            Some(tab) if tab.id != self.active => {
                self.active = tab.id;
                true
            }
            _ => false,
        }
    }
}

type SelectHandler = Box<dyn Fn(&'static str, &mut Window, &mut App) + 'static>;

/// Horizontal row of tab buttons
#[derive(IntoElement)]
pub struct TabBar {
    id: ElementId,
    selection: TabSelection,
    on_select: Option<SelectHandler>,
}

impl TabBar {
    pub fn new(id: impl Into<ElementId>, selection: TabSelection) -> Self {
        Self {
            id: id.into(),
            selection,
            on_select: None,
        }
    }

    pub fn on_select(mut self, handler: impl Fn(&'static str, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for TabBar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_select = self.on_select.map(std::rc::Rc::new);
        let tabs = self.selection.tabs().iter().map(|tab| {
            let active = self.selection.is_active(tab.id);
            let id = tab.id;
            let handler = on_select.clone();

            div()
                .id(SharedString::from(format!("tab-{id}")))
                .px_4()
                .py_2()
                .border_b_2()
                .border_color(if active {
                    AkColors::brand()
                } else {
                    AkColors::transparent()
                })
                .text_size(px(Typography::TEXT_SM))
                .font_weight(gpui::FontWeight::MEDIUM)
                .text_color(if active {
                    AkColors::brand()
                } else {
                    AkColors::text_secondary()
                })
                .cursor_pointer()
                .hover(|s| s.text_color(AkColors::brand()))
                .on_click(move |_event: &ClickEvent, window, cx| {
                    if let Some(handler) = handler.as_ref() {
                        handler(id, window, cx);
                    }
                })
                .child(tab.label)
        });

        div()
            .id(self.id)
            .flex()
            .flex_row()
            .border_b_1()
            .border_color(AkColors::border())
            .children(tabs.collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::demo_page::{DOCUMENTATION_TAB, EXAMPLES_TAB};

    fn tabs() -> Vec<TabSpec> {
        vec![
            TabSpec {
                id: EXAMPLES_TAB,
                label: "Examples",
            },
            TabSpec {
                id: DOCUMENTATION_TAB,
                label: "Documentation",
            },
        ]
    }

    #[test]
    fn default_tab_is_selected() {
        let selection = TabSelection::new(tabs(), EXAMPLES_TAB);
        assert_eq!(selection.active(), EXAMPLES_TAB);
    }

    #[test]
    fn missing_default_falls_back_to_first() {
        let selection = TabSelection::new(tabs(), "props");
        assert_eq!(selection.active(), EXAMPLES_TAB);
        assert_eq!(TabSelection::new(Vec::new(), EXAMPLES_TAB).active(), "");
    }

    #[test]
    fn select_switches_known_tabs_only() {
        let mut selection = TabSelection::new(tabs(), EXAMPLES_TAB);
        assert!(selection.select(DOCUMENTATION_TAB));
        assert!(!selection.select(DOCUMENTATION_TAB));
        assert!(!selection.select("unknown"));
        assert!(selection.is_active(DOCUMENTATION_TAB));
    }
}
