//! Component Page - Fallback Screens
//!
//! What the content area shows when a route has no demo to render.

use gpui::{div, px, IntoElement, ParentElement, SharedString, Styled};

use crate::playground::types::ComponentInfo;
use crate::theme::colors::AkColors;
use crate::theme::typography::Typography;

/// Heading and message for a fallback screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub heading: SharedString,
    pub message: SharedString,
    pub category: Option<SharedString>,
}

impl Notice {
    pub fn component_not_found(key: &str) -> Self {
        Self {
            heading: "Component Not Found".into(),
            message: format!("The component \"{key}\" doesn't exist yet.").into(),
            category: None,
        }
    }

    pub fn under_development(info: &ComponentInfo) -> Self {
        Self {
            heading: "🚧 Component Under Development".into(),
            message: format!(
                "The {} component is currently being built. Check back soon for interactive \
                 examples and documentation!",
                info.name
            )
            .into(),
            category: Some(info.category.clone()),
        }
    }

    pub fn page_not_found(path: &str) -> Self {
        Self {
            heading: "Page Not Found".into(),
            message: format!("Nothing lives at \"{path}\".").into(),
            category: None,
        }
    }

    pub fn render(self) -> impl IntoElement {
        div()
            .max_w(px(640.0))
            .p_6()
            .rounded_lg()
            .bg(AkColors::surface())
            .border_1()
            .border_color(AkColors::border())
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(AkColors::text_primary())
                    .child(self.heading),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(AkColors::text_secondary())
                    .child(self.message),
            )
            .children(self.category.map(|category| {
                div()
                    .flex()
                    .gap_1()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(AkColors::text_muted())
                    .child(div().font_weight(gpui::FontWeight::BOLD).child("Category:"))
                    .child(category)
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::catalog::component_info;

    #[test]
    fn not_found_names_the_key() {
        let notice = Notice::component_not_found("slider");
        assert_eq!(notice.heading.to_string(), "Component Not Found");
        assert!(notice.message.contains("\"slider\""));
        assert_eq!(notice.category, None);
    }

    #[test]
    fn under_development_shows_category() {
        let notice = Notice::under_development(&component_info("input"));
        assert!(notice.message.contains("The Input component"));
        assert_eq!(notice.category.map(|c| c.to_string()), Some("inputs".to_string()));
    }

    #[test]
    fn page_not_found_echoes_path() {
        let notice = Notice::page_not_found("/a/b");
        assert_eq!(notice.heading.to_string(), "Page Not Found");
        assert!(notice.message.contains("/a/b"));
    }
}
