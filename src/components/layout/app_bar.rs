//! AppBar Component
//!
//! Top navigation bar with a brand section, menu items and action buttons.
//! Below the breakpoint the menu collapses behind a toggle and opens as a
//! panel with a dismissing overlay.

use gpui::{
    deferred, div, img, prelude::*, px, relative, svg, ClickEvent, Context, Div, Entity,
    EventEmitter, IntoElement, ParentElement, Render, SharedString, Styled, Window,
};

use crate::components::primitives::button::{Button, ButtonVariant};
use crate::style::{Block, ClassList, ClassToken};
use crate::theme::colors::AkColors;
use crate::theme::stylesheet::StyleSheet;
use crate::viewport::{self, Breakpoint, BreakpointAware, Viewport, ViewportSubscription};

/// Class block for app bars
pub const APP_BAR: Block = Block("appbar");

pub const MENU_ICON: &str = "icons/menu.svg";
pub const CLOSE_ICON: &str = "icons/close.svg";

/// A navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: SharedString,
    pub label: SharedString,
    pub href: Option<SharedString>,
    pub disabled: bool,
}

impl MenuItem {
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: None,
            disabled: false,
        }
    }

    pub fn href(mut self, href: impl Into<SharedString>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A button shown in the actions section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub id: SharedString,
    pub label: SharedString,
    pub variant: ButtonVariant,
    pub icon: Option<SharedString>,
}

impl ActionButton {
    /// New action with the ghost variant
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Ghost,
            icon: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AppBarPosition {
    #[default]
    Static,
    Sticky,
    Fixed,
}

impl AppBarPosition {
    pub fn all() -> &'static [AppBarPosition] {
        &[
            AppBarPosition::Static,
            AppBarPosition::Sticky,
            AppBarPosition::Fixed,
        ]
    }
}

impl ClassToken for AppBarPosition {
    fn token(&self) -> &'static str {
        match self {
            AppBarPosition::Static => "static",
            AppBarPosition::Sticky => "sticky",
            AppBarPosition::Fixed => "fixed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AppBarVariant {
    #[default]
    Default,
    Elevated,
}

impl AppBarVariant {
    pub fn all() -> &'static [AppBarVariant] {
        &[AppBarVariant::Default, AppBarVariant::Elevated]
    }
}

impl ClassToken for AppBarVariant {
    fn token(&self) -> &'static str {
        match self {
            AppBarVariant::Default => "default",
            AppBarVariant::Elevated => "elevated",
        }
    }
}

/// Brand logo content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppBarLogo {
    /// Image source (asset path or URL)
    Image(SharedString),
    /// Short text badge, e.g. a single letter
    Glyph(SharedString),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppBarProps {
    pub logo: Option<AppBarLogo>,
    pub title: Option<SharedString>,
    pub menu_items: Vec<MenuItem>,
    pub active_item: Option<SharedString>,
    pub actions: Vec<ActionButton>,
    pub position: AppBarPosition,
    pub variant: AppBarVariant,
    pub breakpoint: Breakpoint,
    pub class_name: Option<SharedString>,
}

impl Default for AppBarProps {
    fn default() -> Self {
        Self {
            logo: None,
            title: None,
            menu_items: Vec::new(),
            active_item: None,
            actions: Vec::new(),
            position: AppBarPosition::default(),
            variant: AppBarVariant::default(),
            breakpoint: Breakpoint::default(),
            class_name: None,
        }
    }
}

impl AppBarProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logo(mut self, logo: AppBarLogo) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn menu_items(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.menu_items = items.into_iter().collect();
        self
    }

    pub fn active_item(mut self, id: impl Into<SharedString>) -> Self {
        self.active_item = Some(id.into());
        self
    }

    pub fn actions(mut self, actions: impl IntoIterator<Item = ActionButton>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    pub fn position(mut self, position: AppBarPosition) -> Self {
        self.position = position;
        self
    }

    pub fn variant(mut self, variant: AppBarVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Width in pixels below which the mobile layout is used
    pub fn breakpoint(mut self, width: f32) -> Self {
        self.breakpoint = Breakpoint(width);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<SharedString>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn class_list(&self) -> ClassList {
        let mut classes = ClassList::new()
            .with(APP_BAR.name())
            .with(APP_BAR.modifier(self.position.token()))
            .with(APP_BAR.modifier(self.variant.token()));
        classes.push_custom(self.class_name.as_ref().map(SharedString::as_str));
        classes
    }

    /// Classes for a menu link in the desktop or mobile menu
    pub fn menu_link_classes(&self, item: &MenuItem, mobile: bool) -> ClassList {
        let element = if mobile {
            "mobile-menu-link"
        } else {
            "menu-link"
        };
        let active = self.active_item.as_ref() == Some(&item.id);
        ClassList::new()
            .with(APP_BAR.element(element))
            .with_if(active, APP_BAR.element_modifier(element, "active"))
            .with_if(item.disabled, APP_BAR.element_modifier(element, "disabled"))
    }

    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| item.id.as_str() == id)
    }

    pub fn has_menu(&self) -> bool {
        !self.menu_items.is_empty()
    }

    /// Alt text for an image logo
    pub fn logo_alt(&self) -> SharedString {
        self.title.clone().unwrap_or_else(|| SharedString::from("Logo"))
    }
}

/// Layout mode of the navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuMode {
    #[default]
    Desktop,
    MobileCollapsed,
    MobileExpanded,
}

/// Breakpoint-driven menu state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveMenu {
    breakpoint: Breakpoint,
    mode: MenuMode,
}

impl ResponsiveMenu {
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            mode: MenuMode::Desktop,
        }
    }

    pub fn mode(&self) -> MenuMode {
        self.mode
    }

    pub fn is_mobile(&self) -> bool {
        self.mode != MenuMode::Desktop
    }

    pub fn is_open(&self) -> bool {
        self.mode == MenuMode::MobileExpanded
    }

    /// Apply a new viewport width, returning whether the mode changed
    pub fn on_resize(&mut self, width: f32) -> bool {
        let next = if !self.breakpoint.is_mobile(width) {
            MenuMode::Desktop
        } else if self.mode == MenuMode::Desktop {
            MenuMode::MobileCollapsed
        } else {
            self.mode
        };
        let changed = next != self.mode;
        self.mode = next;
        changed
    }

    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            MenuMode::Desktop => MenuMode::Desktop,
            MenuMode::MobileCollapsed => MenuMode::MobileExpanded,
            MenuMode::MobileExpanded => MenuMode::MobileCollapsed,
        };
    }

    pub fn close(&mut self) {
        if self.mode == MenuMode::MobileExpanded {
            self.mode = MenuMode::MobileCollapsed;
        }
    }

    /// Handle a menu item selection, returning whether it was accepted
    pub fn select(&mut self, item: &MenuItem) -> bool {
        if item.disabled {
            return false;
        }
        self.close();
        true
    }

    pub fn shows_toggle(&self, has_items: bool) -> bool {
        self.is_mobile() && has_items
    }

    pub fn shows_panel(&self, has_items: bool) -> bool {
        self.is_open() && has_items
    }
}

impl BreakpointAware for ResponsiveMenu {
    fn on_viewport_width(&mut self, width: f32) {
        self.on_resize(width);
    }
}

/// Events emitted by an [`AppBar`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppBarEvent {
    BrandClicked,
    MenuItemSelected {
        id: SharedString,
        href: Option<SharedString>,
    },
    ActionClicked {
        id: SharedString,
    },
}

/// Responsive app bar entity
pub struct AppBar {
    props: AppBarProps,
    menu: ResponsiveMenu,
    _viewport: ViewportSubscription,
}

impl EventEmitter<AppBarEvent> for AppBar {}

impl BreakpointAware for AppBar {
    fn on_viewport_width(&mut self, width: f32) {
        let before = self.menu.mode();
        self.menu.on_viewport_width(width);
        if self.menu.mode() != before {
            tracing::debug!(width, mode = ?self.menu.mode(), "AppBar layout changed");
        }
    }
}

impl AppBar {
    pub fn new(props: AppBarProps, viewport: &Entity<Viewport>, cx: &mut Context<Self>) -> Self {
        let mut menu = ResponsiveMenu::new(props.breakpoint);
        menu.on_resize(viewport.read(cx).width());
        let subscription = viewport::subscribe_aware(viewport, cx);

        Self {
            props,
            menu,
            _viewport: subscription,
        }
    }

    pub fn props(&self) -> &AppBarProps {
        &self.props
    }

    pub fn menu(&self) -> &ResponsiveMenu {
        &self.menu
    }

    pub fn set_active_item(&mut self, id: Option<SharedString>, cx: &mut Context<Self>) {
        if self.props.active_item != id {
            self.props.active_item = id;
            cx.notify();
        }
    }

    pub fn toggle_mobile_menu(&mut self, cx: &mut Context<Self>) {
        self.menu.toggle();
        cx.notify();
    }

    pub fn close_mobile_menu(&mut self, cx: &mut Context<Self>) {
        self.menu.close();
        cx.notify();
    }

    pub fn select_item(&mut self, id: &str, cx: &mut Context<Self>) {
        let Some(item) = self.props.find_item(id).cloned() else {
            return;
        };
        if self.menu.select(&item) {
            cx.emit(AppBarEvent::MenuItemSelected {
                id: item.id,
                href: item.href,
            });
            cx.notify();
        }
    }

    fn element(sheet: &StyleSheet, element: &str) -> Div {
        sheet
            .resolve(&ClassList::new().with(APP_BAR.element(element)))
            .apply(div())
    }

    fn render_brand(&self, sheet: &StyleSheet, cx: &Context<Self>) -> impl IntoElement {
        let logo = self.props.logo.clone().map(|logo| {
            let content = match logo {
                AppBarLogo::Image(src) => {
                    let alt = self.props.logo_alt();
                    img(src)
                        .size(px(32.0))
                        .with_fallback(move || div().text_xs().child(alt.clone()).into_any_element())
                        .into_any_element()
                }
                AppBarLogo::Glyph(glyph) => div()
                    .size(px(32.0))
                    .rounded_md()
                    .bg(AkColors::brand())
                    .text_color(AkColors::text_light())
                    .font_weight(gpui::FontWeight::BOLD)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(glyph)
                    .into_any_element(),
            };
            Self::element(sheet, "logo").child(content)
        });

        Self::element(sheet, "brand")
            .id("appbar-brand")
            .items_center()
            .on_click(cx.listener(|_this, _event: &ClickEvent, _window, cx| {
                cx.emit(AppBarEvent::BrandClicked);
            }))
            .when_some(logo, |el, logo| el.child(logo))
            .when_some(self.props.title.clone(), |el, title| {
                el.child(Self::element(sheet, "title").child(title))
            })
    }

    fn render_menu_link(
        &self,
        sheet: &StyleSheet,
        item: &MenuItem,
        mobile: bool,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let style = sheet.resolve(&self.props.menu_link_classes(item, mobile));
        let prefix = if mobile { "appbar-mobile-link" } else { "appbar-link" };
        let id = item.id.clone();
        let disabled = item.disabled;

        let mut link = style.apply(div().id(SharedString::from(format!("{prefix}-{}", item.id))));
        if !disabled {
            if let Some(hover_bg) = style.hover_background {
                link = link.hover(move |s| s.bg(hover_bg));
            }
        }

        link.on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
            this.select_item(&id, cx);
        }))
        .child(item.label.clone())
    }

    fn render_actions(&self, sheet: &StyleSheet, cx: &Context<Self>) -> impl IntoElement {
        let has_menu = self.props.has_menu();
        let buttons = self.props.actions.iter().map(|action| {
            let id = action.id.clone();
            let mut button = Button::new(
                SharedString::from(format!("appbar-action-{}", action.id)),
                action.label.clone(),
            )
            .variant(action.variant)
            .class_name(APP_BAR.element("action-button"))
            .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                cx.emit(AppBarEvent::ActionClicked { id: id.clone() });
            }));
            if let Some(icon) = action.icon.clone() {
                button = button.start_icon(icon);
            }
            button
        });

        let toggle = self.menu.shows_toggle(has_menu).then(|| {
            let open = self.menu.is_open();
            let classes = ClassList::new()
                .with(APP_BAR.element("mobile-toggle"))
                .with_if(open, APP_BAR.element_modifier("mobile-toggle", "open"));
            let icon = if open { CLOSE_ICON } else { MENU_ICON };
            sheet
                .resolve(&classes)
                .apply(div().id("appbar-mobile-toggle"))
                .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                    this.toggle_mobile_menu(cx);
                }))
                .child(
                    sheet
                        .resolve(&ClassList::new().with(APP_BAR.element("hamburger")))
                        .apply(svg().path(icon).size(px(20.0))),
                )
        });

        Self::element(sheet, "actions")
            .items_center()
            .children(buttons)
            .children(toggle)
    }
}

impl Render for AppBar {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let sheet = StyleSheet::current(cx);
        let has_menu = self.props.has_menu();
        let mobile = self.menu.is_mobile();

        let nav = has_menu.then(|| {
            let classes = ClassList::new()
                .with(APP_BAR.element("nav"))
                .with_if(mobile, APP_BAR.element_modifier("nav", "mobile"));
            let items: Vec<_> = if mobile {
                Vec::new()
            } else {
                self.props
                    .menu_items
                    .iter()
                    .map(|item| {
                        Self::element(sheet, "menu-item").child(self.render_menu_link(
                            sheet, item, false, cx,
                        ))
                    })
                    .collect()
            };
            sheet
                .resolve(&classes)
                .apply(div())
                .flex_1()
                .when(!items.is_empty(), |el| {
                    el.child(Self::element(sheet, "menu").children(items))
                })
        });

        let panel = self.menu.shows_panel(has_menu).then(|| {
            let items: Vec<_> = self
                .props
                .menu_items
                .iter()
                .map(|item| {
                    Self::element(sheet, "mobile-menu-item")
                        .child(self.render_menu_link(sheet, item, true, cx))
                })
                .collect();
            Self::element(sheet, "mobile-menu").child(
                Self::element(sheet, "mobile-nav")
                    .child(Self::element(sheet, "mobile-menu-list").children(items)),
            )
        });

        let overlay = (mobile && self.menu.is_open()).then(|| {
            let height = window.viewport_size().height;
            deferred(
                Self::element(sheet, "overlay")
                    .id("appbar-overlay")
                    .absolute()
                    .top(relative(1.0))
                    .left_0()
                    .w_full()
                    .h(height)
                    .occlude()
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.close_mobile_menu(cx);
                    })),
            )
        });

        let brand = self.render_brand(sheet, cx);
        let actions = self.render_actions(sheet, cx);

        sheet
            .resolve(&self.props.class_list())
            .apply(div().relative())
            .child(
                Self::element(sheet, "container")
                    .items_center()
                    .justify_between()
                    .child(brand)
                    .children(nav)
                    .child(actions),
            )
            .children(panel)
            .children(overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("home", "Home"),
            MenuItem::new("docs", "Docs").href("/docs"),
            MenuItem::new("admin", "Admin").disabled(true),
        ]
    }

    #[test]
    fn class_list_includes_position_and_variant() {
        let props = AppBarProps::new()
            .position(AppBarPosition::Sticky)
            .variant(AppBarVariant::Elevated)
            .class_name("site-header");
        assert_eq!(
            props.class_list().to_string(),
            "appbar appbar--sticky appbar--elevated site-header"
        );
        assert_eq!(
            AppBarProps::new().class_list().to_string(),
            "appbar appbar--static appbar--default"
        );
    }

    #[test]
    fn menu_link_classes_mark_active_and_disabled() {
        let props = AppBarProps::new().menu_items(items()).active_item("home");
        let home = &props.menu_items[0];
        let admin = &props.menu_items[2];

        assert_eq!(
            props.menu_link_classes(home, false).to_string(),
            "appbar__menu-link appbar__menu-link--active"
        );
        assert_eq!(
            props.menu_link_classes(admin, true).to_string(),
            "appbar__mobile-menu-link appbar__mobile-menu-link--disabled"
        );
    }

    #[test]
    fn narrow_width_shows_toggle() {
        let mut menu = ResponsiveMenu::new(Breakpoint::default());
        menu.on_resize(500.0);
        assert_eq!(menu.mode(), MenuMode::MobileCollapsed);
        assert!(menu.shows_toggle(true));
        assert!(!menu.shows_toggle(false));
    }

    #[test]
    fn widening_closes_open_panel() {
        let mut menu = ResponsiveMenu::new(Breakpoint::default());
        menu.on_resize(500.0);
        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.on_resize(768.0));
        assert_eq!(menu.mode(), MenuMode::Desktop);
        assert!(!menu.shows_toggle(true));
        assert!(!menu.shows_panel(true));
    }

    #[test]
    fn narrow_resize_keeps_open_panel() {
        let mut menu = ResponsiveMenu::new(Breakpoint::default());
        menu.on_resize(500.0);
        menu.toggle();
        assert!(!menu.on_resize(400.0));
        assert!(menu.is_open());
    }

    fn publish_widths(menu: &mut impl BreakpointAware, widths: &[f32]) {
        let mut viewport = Viewport::new(1280.0);
        for width in widths {
            // observers only hear about widths that actually changed
            if viewport.set_width(*width) {
                menu.on_viewport_width(viewport.width());
            }
        }
    }

    #[test]
    fn viewport_widths_drive_the_menu() {
        let mut menu = ResponsiveMenu::new(Breakpoint::default());
        publish_widths(&mut menu, &[1280.0, 600.0]);
        assert_eq!(menu.mode(), MenuMode::MobileCollapsed);

        menu.toggle();
        publish_widths(&mut menu, &[600.0, 500.0]);
        assert!(menu.is_open());

        publish_widths(&mut menu, &[1024.0]);
        assert_eq!(menu.mode(), MenuMode::Desktop);
        assert!(!menu.shows_panel(true));
    }

    #[test]
    fn toggle_is_noop_on_desktop() {
        let mut menu = ResponsiveMenu::new(Breakpoint::default());
        menu.on_resize(1200.0);
        menu.toggle();
        assert_eq!(menu.mode(), MenuMode::Desktop);
    }

    #[test]
    fn selection_collapses_unless_disabled() {
        let items = items();
        let mut menu = ResponsiveMenu::new(Breakpoint(1000.0));
        menu.on_resize(900.0);
        menu.toggle();

        assert!(!menu.select(&items[2]));
        assert!(menu.is_open());

        assert!(menu.select(&items[1]));
        assert_eq!(menu.mode(), MenuMode::MobileCollapsed);
    }

    #[test]
    fn custom_breakpoint_applies() {
        let props = AppBarProps::new().breakpoint(1024.0);
        let mut menu = ResponsiveMenu::new(props.breakpoint);
        menu.on_resize(900.0);
        assert!(menu.is_mobile());
    }

    #[test]
    fn actions_default_to_ghost() {
        let action = ActionButton::new("login", "Login");
        assert_eq!(action.variant, ButtonVariant::Ghost);
        assert_eq!(action.icon, None);
    }

    #[test]
    fn logo_alt_uses_title() {
        assert_eq!(AppBarProps::new().logo_alt().to_string(), "Logo");
        assert_eq!(AppBarProps::new().title("AKGUI").logo_alt().to_string(), "AKGUI");
    }

    #[test]
    fn every_emitted_token_has_a_style_rule() {
        let sheet = StyleSheet::default_sheet();
        for position in AppBarPosition::all() {
            for variant in AppBarVariant::all() {
                let props = AppBarProps::new().position(*position).variant(*variant);
                for token in props.class_list().iter() {
                    assert!(sheet.has_rule(token), "missing rule for {token}");
                }
            }
        }

        let props = AppBarProps::new().menu_items(items()).active_item("home");
        for item in &props.menu_items {
            for mobile in [false, true] {
                for token in props.menu_link_classes(item, mobile).iter() {
                    assert!(sheet.has_rule(token), "missing rule for {token}");
                }
            }
        }

        for element in [
            "container",
            "brand",
            "logo",
            "title",
            "nav",
            "nav--mobile",
            "menu",
            "menu-item",
            "actions",
            "action-button",
            "mobile-toggle",
            "mobile-toggle--open",
            "hamburger",
            "mobile-menu",
            "mobile-nav",
            "mobile-menu-list",
            "mobile-menu-item",
            "overlay",
        ] {
            assert!(sheet.has_rule(&APP_BAR.element(element)), "missing {element}");
        }
    }
}
