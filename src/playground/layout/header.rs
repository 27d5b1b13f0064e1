//! Header Component
//!
//! The playground header with the sidebar toggle, logo, title and version.

use gpui::{
    div, px, svg, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::app_bar::{CLOSE_ICON, MENU_ICON};
use crate::constants::HEADER_HEIGHT;
use crate::theme::colors::AkColors;
use crate::theme::typography::Typography;
use crate::VERSION;

pub const LOGO_ICON: &str = "icons/logo.svg";

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Toggle icon follows the sidebar
        cx.observe(&entities.layout, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let sidebar_open = self.entities.layout.read(cx).is_sidebar_open();
        let toggle_icon = if sidebar_open { CLOSE_ICON } else { MENU_ICON };
        let entities = self.entities.clone();
        let home = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_shrink_0()
            .bg(AkColors::surface())
            .border_b_1()
            .border_color(AkColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: toggle, logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .id("sidebar-toggle")
                            .p_1()
                            .rounded_md()
                            .cursor_pointer()
                            .hover(|s| s.bg(AkColors::ghost_hover()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.layout.update(cx, |layout, cx| {
                                    layout.toggle_sidebar();
                                    cx.notify();
                                });
                            })
                            .child(
                                svg()
                                    .path(toggle_icon)
                                    .size(px(20.0))
                                    .text_color(AkColors::text_secondary()),
                            ),
                    )
                    .child(
                        div()
                            .id("header-brand")
                            .flex()
                            .items_center()
                            .gap_2()
                            .cursor_pointer()
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                home.navigation.update(cx, |navigation, cx| {
                                    if navigation.navigate_to_path("/") {
                                        cx.notify();
                                    }
                                });
                            })
                            .child(svg().path(LOGO_ICON).size(px(28.0)).text_color(AkColors::brand()))
                            .child(
                                div()
                                    .text_color(AkColors::text_primary())
                                    .text_size(px(Typography::TEXT_LG))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .child("AKGUI Playground"),
                            ),
                    ),
            )
            // Right side: version
            .child(
                div()
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .bg(AkColors::brand_tint())
                    .text_color(AkColors::brand())
                    .text_size(px(Typography::TEXT_XS))
                    .child(format!("v{VERSION}")),
            )
    }
}
