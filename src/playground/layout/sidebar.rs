//! Sidebar Component
//!
//! Navigation sidebar listing the overview and every catalog component.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::SIDEBAR_WIDTH;
use crate::playground::catalog::Catalog;
use crate::playground::routes::Route;
use crate::theme::colors::AkColors;
use crate::theme::typography::Typography;
use crate::viewport::{self, ViewportSubscription};

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
    _viewport: ViewportSubscription,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Initial visibility comes from the startup width
        let width = entities.viewport.read(cx).width();
        entities.layout.update(cx, |layout, cx| {
            if layout.on_resize(width) {
                cx.notify();
            }
        });

        let subscription = viewport::subscribe(&entities.viewport, cx, |this, width, cx| {
            this.entities.layout.update(cx, |layout, cx| {
                if layout.on_resize(width) {
                    cx.notify();
                }
            });
        });

        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.registry, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            _viewport: subscription,
        }
    }

    fn render_section_title(title: &'static str) -> impl IntoElement {
        div()
            .px_4()
            .pt_4()
            .pb_1()
            .text_size(px(Typography::TEXT_XS))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .text_color(AkColors::text_muted())
            .child(title.to_uppercase())
    }

    fn render_nav_item(
        &self,
        route: Route,
        label: SharedString,
        active: bool,
    ) -> impl IntoElement {
        let entities = self.entities.clone();

        let bg_color = if active {
            AkColors::brand_tint()
        } else {
            AkColors::transparent()
        };

        let text_color = if active {
            AkColors::brand()
        } else {
            AkColors::text_secondary()
        };

        let border_color = if active {
            AkColors::brand()
        } else {
            AkColors::transparent()
        };

        div()
            .id(SharedString::from(format!("nav-{}", route.path())))
            .w_full()
            .px_4()
            .py_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(Typography::TEXT_SM))
            .cursor_pointer()
            .hover(|s| s.bg(AkColors::secondary_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.navigation.update(cx, |navigation, cx| {
                    if navigation.navigate(route.clone()) {
                        cx.notify();
                    }
                });
                entities.layout.update(cx, |layout, cx| {
                    if layout.on_navigate() {
                        cx.notify();
                    }
                });
            })
            .child(label)
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let route = self.entities.navigation.read(cx).route().clone();
        let catalog = Catalog::from_registry(self.entities.registry.read(cx));
        let entities = self.entities.clone();

        let components: Vec<_> = catalog
            .components()
            .iter()
            .map(|info| {
                let key = info.key();
                let active = route.is_component(key);
                self.render_nav_item(Route::component(key.to_string()), info.name.clone(), active)
            })
            .collect();

        div()
            .id("sidebar")
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_shrink_0()
            .bg(AkColors::surface())
            .border_r_1()
            .border_color(AkColors::border())
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .px_4()
                    .py_3()
                    .border_b_1()
                    .border_color(AkColors::border())
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_BASE))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(AkColors::text_primary())
                            .child("Components"),
                    )
                    .child(
                        div()
                            .id("sidebar-close")
                            .px_2()
                            .rounded_md()
                            .cursor_pointer()
                            .text_color(AkColors::text_secondary())
                            .hover(|s| s.bg(AkColors::ghost_hover()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.layout.update(cx, |layout, cx| {
                                    if layout.close_sidebar() {
                                        cx.notify();
                                    }
                                });
                            })
                            .child("×"),
                    ),
            )
            .child(Self::render_section_title("Getting Started"))
            .child(self.render_nav_item(
                Route::Overview,
                SharedString::from("Overview"),
                route == Route::Overview,
            ))
            .child(Self::render_section_title("Components"))
            .children(components)
    }
}
