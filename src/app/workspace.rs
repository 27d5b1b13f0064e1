//! Workspace - Main Shell with Layout and Routing
//!
//! The workspace is the main container that holds the header, sidebar and
//! content area. It publishes the window width to the shared viewport and
//! resolves the active route to a page.

use std::sync::Arc;

use ahash::AHashMap;
use gpui::{
    deferred, div, prelude::*, px, AnyElement, AppContext, ClickEvent, Context, Entity, IntoElement,
    ParentElement, Render, Styled, Subscription, Window,
};

use crate::app::entities::AppEntities;
use crate::playground::catalog::Catalog;
use crate::playground::demo_view::DemoView;
use crate::playground::layout::header::Header;
use crate::playground::layout::sidebar::Sidebar;
use crate::playground::pages::component::Notice;
use crate::playground::pages::home;
use crate::playground::routes::Page;
use crate::playground::types::ComponentConfig;
use crate::theme::colors::AkColors;
use crate::viewport::Viewport;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    // Demo views are created lazily and cached by component key
    demo_views: AHashMap<String, Entity<DemoView>>,
    _bounds: Subscription,
}

impl Workspace {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let width = f32::from(window.viewport_size().width);
        Viewport::publish(&entities.viewport, width, cx);

        let bounds = cx.observe_window_bounds(window, |this, window, cx| {
            let width = f32::from(window.viewport_size().width);
            Viewport::publish(&this.entities.viewport, width, cx);
        });

        // Create layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        // Observe route and layout changes
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.layout, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            sidebar,
            demo_views: AHashMap::new(),
            _bounds: bounds,
        }
    }

    /// Get or create the demo view for a registered component
    fn demo_view(
        &mut self,
        key: &str,
        config: Arc<ComponentConfig>,
        cx: &mut Context<Self>,
    ) -> Entity<DemoView> {
        if let Some(view) = self.demo_views.get(key) {
            return view.clone();
        }
        let viewport = self.entities.viewport.clone();
        let view = cx.new(|cx| DemoView::new(key.to_string(), config, &viewport, cx));
        self.demo_views.insert(key.to_string(), view.clone());
        view
    }

    fn render_page(&mut self, cx: &mut Context<Self>) -> AnyElement {
        let route = self.entities.navigation.read(cx).route().clone();
        let registry = self.entities.registry.read(cx);
        let catalog = Catalog::from_registry(registry);
        let page = Page::resolve(&route, &catalog, registry);

        match page {
            Page::Home => home::render().into_any_element(),
            Page::ComponentNotFound(key) => Notice::component_not_found(&key).render().into_any_element(),
            Page::UnderDevelopment(info) => Notice::under_development(&info).render().into_any_element(),
            Page::PageNotFound(path) => Notice::page_not_found(&path).render().into_any_element(),
            Page::Demo(config) => {
                let key = route.path().trim_start_matches('/').to_string();
                self.demo_view(&key, config, cx).into_any_element()
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let layout = *self.entities.layout.read(cx);
        let content = self.render_page(cx);
        let entities = self.entities.clone();

        let docked_sidebar = (layout.is_sidebar_open() && !layout.is_mobile())
            .then(|| self.sidebar.clone());

        let drawer = layout.shows_overlay().then(|| {
            deferred(
                div()
                    .absolute()
                    .inset_0()
                    .flex()
                    .flex_row()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .id("sidebar-overlay")
                            .flex_1()
                            .h_full()
                            .bg(AkColors::overlay())
                            .occlude()
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.layout.update(cx, |layout, cx| {
                                    if layout.close_sidebar() {
                                        cx.notify();
                                    }
                                });
                            }),
                    ),
            )
        });

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(AkColors::background())
            .child(
                // Header
                self.header.clone(),
            )
            .child(
                // Main content area
                div()
                    .relative()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .children(docked_sidebar)
                    .child(
                        // Content
                        div()
                            .id("main-content")
                            .flex_1()
                            .overflow_y_scroll()
                            .child(div().max_w(px(1200.0)).p_8().child(content)),
                    )
                    .children(drawer),
            )
    }
}
