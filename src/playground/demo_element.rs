//! DemoElement - Declarative Example Trees
//!
//! An example is described once as a `DemoElement` tree. The same tree renders
//! the live preview and produces the code shown next to it.

use gpui::{
    div, prelude::*, px, AnyElement, AppContext, Context, ElementId, Entity, IntoElement,
    ParentElement, Rgba, SharedString, Styled,
};

use crate::components::composite::card::{Card, CardProps};
use crate::components::layout::app_bar::{
    ActionButton, AppBar, AppBarLogo, AppBarProps, MenuItem,
};
use crate::components::primitives::button::{Button, ButtonProps};
use crate::playground::snippet::{indent, quote, slug, Chain};
use crate::theme::colors::AkColors;
use crate::viewport::Viewport;

/// Width given to example cards that do not set their own
pub const PREVIEW_CARD_WIDTH: f32 = 280.0;

/// Palette entries layout wrappers may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Brand,
    TextLight,
}

impl Swatch {
    fn color(self) -> Rgba {
        match self {
            Swatch::Brand => AkColors::brand(),
            Swatch::TextLight => AkColors::text_light(),
        }
    }

    fn expr(self) -> &'static str {
        match self {
            Swatch::Brand => "AkColors::brand()",
            Swatch::TextLight => "AkColors::text_light()",
        }
    }
}

/// One style builder call, applied to the preview and printed in the snippet
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleCall {
    WFull,
    MinH(f32),
    Flex,
    FlexRow,
    FlexCol,
    FlexWrap,
    ItemsCenter,
    JustifyCenter,
    Gap4,
    Text2xl,
    Bg(Swatch),
    TextColor(Swatch),
}

impl StyleCall {
    pub fn apply<E: Styled>(self, el: E) -> E {
        match self {
            StyleCall::WFull => el.w_full(),
            StyleCall::MinH(height) => el.min_h(px(height)),
            StyleCall::Flex => el.flex(),
            StyleCall::FlexRow => el.flex_row(),
            StyleCall::FlexCol => el.flex_col(),
            StyleCall::FlexWrap => el.flex_wrap(),
            StyleCall::ItemsCenter => el.items_center(),
            StyleCall::JustifyCenter => el.justify_center(),
            StyleCall::Gap4 => el.gap_4(),
            StyleCall::Text2xl => el.text_2xl(),
            StyleCall::Bg(swatch) => el.bg(swatch.color()),
            StyleCall::TextColor(swatch) => el.text_color(swatch.color()),
        }
    }

    fn write(self, chain: &mut Chain) {
        match self {
            StyleCall::WFull => chain.call("w_full", ""),
            StyleCall::MinH(height) => chain.call("min_h", format!("px({height:?})")),
            StyleCall::Flex => chain.call("flex", ""),
            StyleCall::FlexRow => chain.call("flex_row", ""),
            StyleCall::FlexCol => chain.call("flex_col", ""),
            StyleCall::FlexWrap => chain.call("flex_wrap", ""),
            StyleCall::ItemsCenter => chain.call("items_center", ""),
            StyleCall::JustifyCenter => chain.call("justify_center", ""),
            StyleCall::Gap4 => chain.call("gap_4", ""),
            StyleCall::Text2xl => chain.call("text_2xl", ""),
            StyleCall::Bg(swatch) => chain.call("bg", swatch.expr()),
            StyleCall::TextColor(swatch) => chain.call("text_color", swatch.expr()),
        }
    }
}

pub const ROW_STYLE: &[StyleCall] = &[
    StyleCall::WFull,
    StyleCall::Flex,
    StyleCall::FlexRow,
    StyleCall::FlexWrap,
    StyleCall::ItemsCenter,
    StyleCall::Gap4,
];

pub const STACK_STYLE: &[StyleCall] = &[
    StyleCall::WFull,
    StyleCall::Flex,
    StyleCall::FlexCol,
    StyleCall::Gap4,
];

pub const TILE_STYLE: &[StyleCall] = &[
    StyleCall::WFull,
    StyleCall::MinH(120.0),
    StyleCall::Bg(Swatch::Brand),
    StyleCall::TextColor(Swatch::TextLight),
    StyleCall::Text2xl,
    StyleCall::Flex,
    StyleCall::ItemsCenter,
    StyleCall::JustifyCenter,
];

/// `div()` carrying `calls`
fn styled_div(calls: &[StyleCall]) -> gpui::Div {
    calls.iter().fold(div(), |el, call| call.apply(el))
}

/// Snippet head for a `div()` carrying `calls`
fn style_chain(calls: &[StyleCall]) -> Chain {
    let mut chain = Chain::new("div()");
    for call in calls {
        call.write(&mut chain);
    }
    chain
}

/// Props an example card renders with
fn preview_card_props(props: &CardProps) -> CardProps {
    match props.width {
        Some(_) => props.clone(),
        None => props.clone().width(PREVIEW_CARD_WIDTH),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DemoElement {
    /// Plain paragraph text
    Text(SharedString),
    /// Colored media tile holding a glyph
    Tile(SharedString),
    /// Horizontal group with wrapping
    Row(Vec<DemoElement>),
    /// Vertical group
    Stack(Vec<DemoElement>),
    Button(ButtonProps),
    Card {
        props: CardProps,
        media: Option<Box<DemoElement>>,
        body: Vec<DemoElement>,
        footer: Vec<DemoElement>,
    },
    AppBar(AppBarProps),
}

impl DemoElement {
    pub fn text(text: impl Into<SharedString>) -> Self {
        Self::Text(text.into())
    }

    pub fn tile(glyph: impl Into<SharedString>) -> Self {
        Self::Tile(glyph.into())
    }

    pub fn row(children: impl IntoIterator<Item = DemoElement>) -> Self {
        Self::Row(children.into_iter().collect())
    }

    pub fn stack(children: impl IntoIterator<Item = DemoElement>) -> Self {
        Self::Stack(children.into_iter().collect())
    }

    pub fn button(props: ButtonProps) -> Self {
        Self::Button(props)
    }

    /// Card with text body
    pub fn card(props: CardProps, body: impl Into<SharedString>) -> Self {
        Self::Card {
            props,
            media: None,
            body: vec![Self::text(body)],
            footer: Vec::new(),
        }
    }

    pub fn app_bar(props: AppBarProps) -> Self {
        Self::AppBar(props)
    }

    /// Attach media to a card element; other elements are returned unchanged
    pub fn with_media(self, element: DemoElement) -> Self {
        match self {
            Self::Card {
                props, body, footer, ..
            } => Self::Card {
                props,
                media: Some(Box::new(element)),
                body,
                footer,
            },
            other => other,
        }
    }

    /// Append footer content to a card element
    pub fn with_footer(self, element: DemoElement) -> Self {
        match self {
            Self::Card {
                props,
                media,
                body,
                mut footer,
            } => {
                footer.push(element);
                Self::Card {
                    props,
                    media,
                    body,
                    footer,
                }
            }
            other => other,
        }
    }

    /// Append body content to a card element
    pub fn with_body(self, element: DemoElement) -> Self {
        match self {
            Self::Card {
                props,
                media,
                mut body,
                footer,
            } => {
                body.push(element);
                Self::Card {
                    props,
                    media,
                    body,
                    footer,
                }
            }
            other => other,
        }
    }

    /// Depth-first walk over this element and all descendants
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DemoElement)) {
        visit(self);
        match self {
            Self::Row(children) | Self::Stack(children) => {
                for child in children {
                    child.walk(visit);
                }
            }
            Self::Card {
                media,
                body,
                footer,
                ..
            } => {
                if let Some(media) = media {
                    media.walk(visit);
                }
                for child in body.iter().chain(footer) {
                    child.walk(visit);
                }
            }
            Self::Text(_) | Self::Tile(_) | Self::Button(_) | Self::AppBar(_) => {}
        }
    }

    /// App bar props in render order
    pub fn app_bars(&self) -> Vec<&AppBarProps> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if let Self::AppBar(props) = element {
                found.push(props);
            }
        });
        found
    }

    /// Source text for this element
    ///
    /// Top-level groups list their children one after another; layout
    /// wrappers only appear when nested inside another component.
    pub fn to_snippet(&self) -> String {
        match self {
            Self::Row(children) | Self::Stack(children) => children
                .iter()
                .map(|child| child.to_snippet())
                .collect::<Vec<_>>()
                .join("\n\n"),
            Self::AppBar(props) => app_bar_snippet(props).join("\n"),
            other => other.expr_lines().join("\n"),
        }
    }

    fn expr_lines(&self) -> Vec<String> {
        match self {
            Self::Text(text) => vec![quote(text)],
            Self::Tile(glyph) => {
                let mut chain = style_chain(TILE_STYLE);
                chain.call("child", quote(glyph));
                chain.lines()
            }
            Self::Row(children) => group_lines(ROW_STYLE, children),
            Self::Stack(children) => group_lines(STACK_STYLE, children),
            Self::Button(props) => button_chain(props).lines(),
            Self::Card {
                props,
                media,
                body,
                footer,
            } => {
                let mut chain = card_chain(&preview_card_props(props));
                if let Some(media) = media {
                    chain.call_expr("media", media.expr_lines());
                }
                for child in body {
                    chain.call_expr("child", child.expr_lines());
                }
                for child in footer {
                    chain.call_expr("footer", child.expr_lines());
                }
                chain.lines()
            }
            Self::AppBar(props) => app_bar_snippet(props),
        }
    }

    /// Render to GPUI elements, drawing stateful parts from `scope`
    pub fn render(&self, scope: &mut RenderScope<'_>) -> AnyElement {
        match self {
            Self::Text(text) => text.clone().into_any_element(),
            Self::Tile(glyph) => styled_div(TILE_STYLE)
                .child(glyph.clone())
                .into_any_element(),
            Self::Row(children) => {
                let children: Vec<_> = children.iter().map(|child| child.render(scope)).collect();
                styled_div(ROW_STYLE).children(children).into_any_element()
            }
            Self::Stack(children) => {
                let children: Vec<_> = children.iter().map(|child| child.render(scope)).collect();
                styled_div(STACK_STYLE).children(children).into_any_element()
            }
            Self::Button(props) => {
                let label = props.label.clone();
                Button::from_props(scope.next_id("button"), props.clone())
                    .on_click(move |_event, _window, _cx| {
                        tracing::info!(label = %label, "Demo button clicked");
                    })
                    .into_any_element()
            }
            Self::Card {
                props,
                media,
                body,
                footer,
            } => {
                let mut card = Card::from_props(scope.next_id("card"), preview_card_props(props));
                if let Some(media) = media {
                    card = card.media(media.render(scope));
                }
                for child in body {
                    card = card.child(child.render(scope));
                }
                for child in footer {
                    card = card.footer(child.render(scope));
                }
                if props.clickable {
                    let title = props.title.clone().unwrap_or_default();
                    card = card.on_click(move |_window, _cx| {
                        tracing::info!(title = %title, "Demo card activated");
                    });
                }
                card.into_any_element()
            }
            Self::AppBar(_) => match scope.next_app_bar() {
                Some(app_bar) => app_bar.into_any_element(),
                None => div().into_any_element(),
            },
        }
    }
}

fn group_lines(style: &[StyleCall], children: &[DemoElement]) -> Vec<String> {
    let mut chain = style_chain(style);
    for child in children {
        chain.call_expr("child", child.expr_lines());
    }
    chain.lines()
}

fn button_chain(props: &ButtonProps) -> Chain {
    let defaults = ButtonProps::new(props.label.clone());
    let mut chain = Chain::new(format!(
        "Button::new({}, {})",
        quote(&slug(&props.label, "button")),
        quote(&props.label)
    ));
    if props.variant != defaults.variant {
        chain.call("variant", format!("ButtonVariant::{:?}", props.variant));
    }
    if props.size != defaults.size {
        chain.call("size", format!("ButtonSize::{:?}", props.size));
    }
    if props.disabled {
        chain.call("disabled", "true");
    }
    if props.loading {
        chain.call("loading", "true");
    }
    if props.full_width {
        chain.call("full_width", "true");
    }
    if let Some(icon) = &props.start_icon {
        chain.call("start_icon", quote(icon));
    }
    if let Some(icon) = &props.end_icon {
        chain.call("end_icon", quote(icon));
    }
    if let Some(class_name) = &props.class_name {
        chain.call("class_name", quote(class_name));
    }
    chain
}

fn card_chain(props: &CardProps) -> Chain {
    let defaults = CardProps::default();
    let id = props
        .title
        .as_deref()
        .map(|title| slug(title, "card"))
        .unwrap_or_else(|| "card".to_string());
    let mut chain = Chain::new(format!("Card::new({})", quote(&id)));

    let optional_text = [
        ("title", &props.title),
        ("subtitle", &props.subtitle),
        ("image", &props.image),
        ("image_alt", &props.image_alt),
    ];
    for (name, value) in optional_text {
        if let Some(value) = value {
            chain.call(name, quote(value));
        }
    }
    if props.variant != defaults.variant {
        chain.call("variant", format!("CardVariant::{:?}", props.variant));
    }
    if props.size != defaults.size {
        chain.call("size", format!("CardSize::{:?}", props.size));
    }
    if props.orientation != defaults.orientation {
        chain.call("orientation", format!("CardOrientation::{:?}", props.orientation));
    }
    let flags = [
        ("clickable", props.clickable),
        ("selected", props.selected),
        ("loading", props.loading),
        ("disabled", props.disabled),
    ];
    for (name, value) in flags {
        if value {
            chain.call(name, "true");
        }
    }
    if let Some(width) = props.width {
        chain.call("width", format!("{width:?}"));
    }
    if let Some(class_name) = &props.class_name {
        chain.call("class_name", quote(class_name));
    }
    chain
}

fn menu_item_expr(item: &MenuItem) -> String {
    let mut chain = Chain::new(format!(
        "MenuItem::new({}, {})",
        quote(&item.id),
        quote(&item.label)
    ));
    if let Some(href) = &item.href {
        chain.call("href", quote(href));
    }
    if item.disabled {
        chain.call("disabled", "true");
    }
    chain.inline()
}

fn action_expr(action: &ActionButton) -> String {
    let defaults = ActionButton::new(action.id.clone(), action.label.clone());
    let mut chain = Chain::new(format!(
        "ActionButton::new({}, {})",
        quote(&action.id),
        quote(&action.label)
    ));
    if action.variant != defaults.variant {
        chain.call("variant", format!("ButtonVariant::{:?}", action.variant));
    }
    if let Some(icon) = &action.icon {
        chain.call("icon", quote(icon));
    }
    chain.inline()
}

fn app_bar_props_chain(props: &AppBarProps) -> Chain {
    let defaults = AppBarProps::default();
    let mut chain = Chain::new("AppBarProps::new()");
    match &props.logo {
        Some(AppBarLogo::Image(src)) => {
            chain.call("logo", format!("AppBarLogo::Image({}.into())", quote(src)));
        }
        Some(AppBarLogo::Glyph(glyph)) => {
            chain.call("logo", format!("AppBarLogo::Glyph({}.into())", quote(glyph)));
        }
        None => {}
    }
    if let Some(title) = &props.title {
        chain.call("title", quote(title));
    }
    if !props.menu_items.is_empty() {
        let items = props
            .menu_items
            .iter()
            .map(|item| vec![menu_item_expr(item)])
            .collect();
        chain.call_list("menu_items", items);
    }
    if let Some(active) = &props.active_item {
        chain.call("active_item", quote(active));
    }
    if !props.actions.is_empty() {
        let actions = props
            .actions
            .iter()
            .map(|action| vec![action_expr(action)])
            .collect();
        chain.call_list("actions", actions);
    }
    if props.position != defaults.position {
        chain.call("position", format!("AppBarPosition::{:?}", props.position));
    }
    if props.variant != defaults.variant {
        chain.call("variant", format!("AppBarVariant::{:?}", props.variant));
    }
    if props.breakpoint != defaults.breakpoint {
        chain.call("breakpoint", format!("{:?}", props.breakpoint.px()));
    }
    if let Some(class_name) = &props.class_name {
        chain.call("class_name", quote(class_name));
    }
    chain
}

fn app_bar_snippet(props: &AppBarProps) -> Vec<String> {
    let mut props_lines = app_bar_props_chain(props).lines();
    if let Some(last) = props_lines.last_mut() {
        last.push(',');
    }
    let mut lines = vec![
        "cx.new(|cx| {".to_string(),
        "    AppBar::new(".to_string(),
    ];
    lines.extend(indent(props_lines, 2));
    lines.extend([
        "        &viewport,".to_string(),
        "        cx,".to_string(),
        "    )".to_string(),
        "})".to_string(),
    ]);
    lines
}

/// Stateful pieces an example needs across renders
pub struct DemoResources {
    app_bars: Vec<Entity<AppBar>>,
}

impl DemoResources {
    /// Create the entities `element` will draw from
    pub fn build<V: 'static>(
        element: &DemoElement,
        viewport: &Entity<Viewport>,
        cx: &mut Context<V>,
    ) -> Self {
        let app_bars = element
            .app_bars()
            .into_iter()
            .map(|props| {
                let props = props.clone();
                cx.new(|cx| AppBar::new(props, viewport, cx))
            })
            .collect();

        Self { app_bars }
    }

    pub fn app_bars(&self) -> &[Entity<AppBar>] {
        &self.app_bars
    }

    pub fn scope(&self, prefix: impl Into<SharedString>) -> RenderScope<'_> {
        RenderScope {
            prefix: prefix.into(),
            next_id: 0,
            app_bars: self.app_bars.iter(),
        }
    }
}

/// Per-render cursor over element ids and [`DemoResources`]
pub struct RenderScope<'a> {
    prefix: SharedString,
    next_id: usize,
    app_bars: std::slice::Iter<'a, Entity<AppBar>>,
}

impl RenderScope<'_> {
    fn next_id(&mut self, kind: &str) -> ElementId {
        self.next_id += 1;
        ElementId::Name(SharedString::from(format!(
            "{}-{kind}-{}",
            self.prefix, self.next_id
        )))
    }

    fn next_app_bar(&mut self) -> Option<Entity<AppBar>> {
        self.app_bars.next().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::card::{CardOrientation, CardVariant};
    use crate::components::layout::app_bar::AppBarVariant;
    use crate::components::primitives::button::{ButtonSize, ButtonVariant};

    #[test]
    fn default_button_snippet_has_no_calls() {
        let element = DemoElement::button(ButtonProps::new("Click me"));
        assert_eq!(element.to_snippet(), "Button::new(\"click-me\", \"Click me\")");
    }

    #[test]
    fn button_snippet_lists_only_non_defaults() {
        let element = DemoElement::button(
            ButtonProps::new("Delete")
                .variant(ButtonVariant::Danger)
                .size(ButtonSize::Large),
        );
        let code = element.to_snippet();
        assert!(code.contains(".variant(ButtonVariant::Danger)"));
        assert!(code.contains(".size(ButtonSize::Large)"));
        assert!(!code.contains(".disabled"));
        assert!(!code.contains(".loading"));

        let medium = DemoElement::button(ButtonProps::new("Medium").size(ButtonSize::Medium));
        assert!(!medium.to_snippet().contains(".size"));
    }

    #[test]
    fn top_level_row_lists_children() {
        let element = DemoElement::row([
            DemoElement::button(ButtonProps::new("Primary")),
            DemoElement::button(ButtonProps::new("Ghost").variant(ButtonVariant::Ghost)),
        ]);
        assert_eq!(
            element.to_snippet(),
            "Button::new(\"primary\", \"Primary\")\n\nButton::new(\"ghost\", \"Ghost\")\n    .variant(ButtonVariant::Ghost)"
        );
    }

    #[test]
    fn card_snippet_includes_children_and_footer() {
        let element = DemoElement::card(
            CardProps::new()
                .title("Horizontal Card")
                .variant(CardVariant::Outlined)
                .orientation(CardOrientation::Horizontal),
            "Side by side.",
        )
        .with_footer(DemoElement::button(
            ButtonProps::new("Edit").size(ButtonSize::Small),
        ));
        let code = element.to_snippet();

        assert!(code.starts_with("Card::new(\"horizontal-card\")"));
        assert!(code.contains(".title(\"Horizontal Card\")"));
        assert!(code.contains(".orientation(CardOrientation::Horizontal)"));
        assert!(!code.contains(".variant("));
        assert!(code.contains(".child(\"Side by side.\")"));
        assert!(code.contains(".footer(Button::new(\"edit\", \"Edit\")"));
        assert!(code.contains(".size(ButtonSize::Small))"));
    }

    #[test]
    fn app_bar_snippet_wraps_entity_construction() {
        let element = DemoElement::app_bar(
            AppBarProps::new()
                .title("AKGUI")
                .menu_items([MenuItem::new("home", "Home")])
                .active_item("home")
                .actions([ActionButton::new("signup", "Sign Up").variant(ButtonVariant::Primary)])
                .variant(AppBarVariant::Elevated),
        );
        let code = element.to_snippet();

        assert!(code.starts_with("cx.new(|cx| {\n    AppBar::new(\n        AppBarProps::new()"));
        assert!(code.contains("MenuItem::new(\"home\", \"Home\"),"));
        assert!(code.contains(
            "ActionButton::new(\"signup\", \"Sign Up\").variant(ButtonVariant::Primary),"
        ));
        assert!(code.contains(".variant(AppBarVariant::Elevated),"));
        assert!(!code.contains(".position("));
        assert!(!code.contains(".breakpoint("));
        assert!(code.ends_with("        &viewport,\n        cx,\n    )\n})"));
    }

    #[test]
    fn ghost_actions_omit_variant() {
        let element = DemoElement::app_bar(
            AppBarProps::new().actions([ActionButton::new("login", "Login")]),
        );
        assert!(element
            .to_snippet()
            .contains("ActionButton::new(\"login\", \"Login\"),"));
    }

    #[test]
    fn walk_finds_nested_stateful_parts() {
        let element = DemoElement::stack([
            DemoElement::app_bar(AppBarProps::new().title("One")),
            DemoElement::row([
                DemoElement::card(CardProps::new().clickable(true), "a"),
                DemoElement::card(CardProps::new(), "b"),
                DemoElement::card(CardProps::new().clickable(true).disabled(true), "c"),
            ]),
            DemoElement::app_bar(AppBarProps::new().title("Two")),
        ]);

        let titles: Vec<_> = element
            .app_bars()
            .iter()
            .filter_map(|props| props.title.as_ref().map(|t| t.to_string()))
            .collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn group_snippet_uses_preview_style() {
        assert_eq!(
            style_chain(ROW_STYLE).inline(),
            "div().w_full().flex().flex_row().flex_wrap().items_center().gap_4()"
        );
        assert_eq!(
            style_chain(STACK_STYLE).inline(),
            "div().w_full().flex().flex_col().gap_4()"
        );

        let nested = DemoElement::card(CardProps::new().title("Group"), "x")
            .with_footer(DemoElement::row([DemoElement::button(ButtonProps::new("Ok"))]));
        let code = nested.to_snippet();
        assert!(code.contains(".footer(div()"));
        assert!(code.contains(".items_center()"));
        assert!(code.contains(".gap_4()"));
        assert!(!code.contains("gap_2"));
    }

    #[test]
    fn tile_snippet_matches_preview_style() {
        let code = DemoElement::tile("★").to_snippet();
        assert!(code.starts_with("div()\n    .w_full()\n    .min_h(px(120.0))"));
        assert!(code.contains(".bg(AkColors::brand())"));
        assert!(code.contains(".text_color(AkColors::text_light())"));
        assert!(code.ends_with(".child(\"★\")"));
    }

    #[test]
    fn example_cards_show_their_preview_width() {
        let code = DemoElement::card(CardProps::new().title("Sized"), "x").to_snippet();
        assert!(code.contains(".width(280.0)"));

        let custom = DemoElement::card(CardProps::new().width(360.0), "x").to_snippet();
        assert!(custom.contains(".width(360.0)"));
        assert!(!custom.contains("280.0"));
        assert_eq!(CardProps::new().width, None);
    }

    #[test]
    fn builders_ignore_non_cards() {
        let text = DemoElement::text("x").with_footer(DemoElement::text("y"));
        assert_eq!(text, DemoElement::text("x"));
    }
}
