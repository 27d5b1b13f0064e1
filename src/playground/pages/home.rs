//! Home Page - Playground Overview

use gpui::{div, px, IntoElement, ParentElement, SharedString, Styled};

use crate::components::composite::card::{Card, CardVariant};
use crate::theme::colors::AkColors;
use crate::theme::typography::Typography;
use crate::VERSION;

/// Feature highlights: title, description
pub const FEATURES: &[(&str, &str)] = &[
    (
        "🎨 Design System",
        "Clean, professional components following LinkedIn's aesthetic principles.",
    ),
    (
        "⚡ Performance",
        "Native rendering with GPUI and no runtime layout engine to pay for.",
    ),
    (
        "📱 Responsive",
        "Mobile-first layouts that adapt to every window size.",
    ),
    (
        "♿ Accessible",
        "Keyboard support and accessibility descriptions built into every component.",
    ),
];

fn badge(text: impl Into<SharedString>, bg: gpui::Rgba, fg: gpui::Rgba) -> impl IntoElement {
    div()
        .px_3()
        .py_1()
        .rounded_full()
        .bg(bg)
        .text_color(fg)
        .text_size(px(Typography::TEXT_XS))
        .font_weight(gpui::FontWeight::MEDIUM)
        .child(text.into())
}

pub fn render() -> impl IntoElement {
    let cards = FEATURES.iter().enumerate().map(|(ix, (title, description))| {
        div().w(px(260.0)).child(
            Card::new(("feature-card", ix))
                .title(*title)
                .variant(CardVariant::Elevated)
                .child(*description),
        )
    });

    div()
        .flex()
        .flex_col()
        .gap_8()
        .child(
            div()
                .flex()
                .flex_col()
                .gap_3()
                .child(
                    div()
                        .text_size(px(Typography::TEXT_3XL))
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(AkColors::text_primary())
                        .child("Welcome to AKGUI"),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_BASE))
                        .text_color(AkColors::text_secondary())
                        .child(
                            "A minimal and fast native component library for GPUI inspired by \
                             LinkedIn's design system.",
                        ),
                )
                .child(
                    div()
                        .flex()
                        .gap_2()
                        .child(badge(
                            format!("Version {VERSION}"),
                            AkColors::brand_tint(),
                            AkColors::brand(),
                        ))
                        .child(badge(
                            "In Development",
                            AkColors::surface_subtle(),
                            AkColors::warning(),
                        )),
                ),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .gap_4()
                .child(
                    div()
                        .text_size(px(Typography::TEXT_XL))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(AkColors::text_primary())
                        .child("Getting Started"),
                )
                .child(div().flex().flex_wrap().gap_4().children(cards)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_feature_cards() {
        let titles: Vec<_> = FEATURES.iter().map(|(title, _)| *title).collect();
        assert_eq!(
            titles,
            vec!["🎨 Design System", "⚡ Performance", "📱 Responsive", "♿ Accessible"]
        );
    }
}
