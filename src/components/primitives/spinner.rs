//! Spinner Component
//!
//! A rotating loading indicator.

use std::time::Duration;

use gpui::{
    percentage, prelude::*, px, svg, Animation, AnimationExt, App, ElementId, IntoElement, Rgba,
    RenderOnce, Styled, Transformation, Window,
};

use crate::theme::colors::AkColors;

/// Spinner icon path inside the embedded assets.
pub const SPINNER_ICON: &str = "icons/spinner.svg";

/// A spinning loading indicator
#[derive(IntoElement)]
pub struct Spinner {
    id: ElementId,
    size: f32,
    color: Rgba,
}

impl Spinner {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            size: 24.0,
            color: AkColors::brand(),
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }
}

impl RenderOnce for Spinner {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        svg()
            .path(SPINNER_ICON)
            .size(px(self.size))
            .text_color(self.color)
            .with_animation(
                self.id,
                Animation::new(Duration::from_secs(1)).repeat(),
                |svg, delta| svg.with_transformation(Transformation::rotate(percentage(delta))),
            )
    }
}
