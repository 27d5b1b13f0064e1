//! Card Component
//!
//! A content container with optional media, header, body and footer sections.
//! Clickable cards expose a pressable role and respond to Enter/Space.

use std::rc::Rc;

use gpui::{
    div, img, prelude::*, px, AnyElement, App, ClickEvent, Div, ElementId, FocusHandle,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::components::primitives::spinner::Spinner;
use crate::style::{Block, ClassList, ClassToken};
use crate::theme::colors::AkColors;
use crate::theme::stylesheet::StyleSheet;

/// Class block for cards
pub const CARD: Block = Block("card");

/// Fallback alt text for images without explicit alt or title
pub const DEFAULT_IMAGE_ALT: &str = "Card image";

/// Element id of the overlay that captures input while loading
pub const LOADING_OVERLAY_ID: &str = "card-loading-overlay";

/// Card visual variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CardVariant {
    /// No border, no shadow
    Flat,
    /// Thin border (default)
    #[default]
    Outlined,
    /// Drop shadow
    Elevated,
    /// Tinted background
    Subtle,
}

impl CardVariant {
    pub fn all() -> &'static [CardVariant] {
        &[
            CardVariant::Flat,
            CardVariant::Outlined,
            CardVariant::Elevated,
            CardVariant::Subtle,
        ]
    }
}

impl ClassToken for CardVariant {
    fn token(&self) -> &'static str {
        match self {
            CardVariant::Flat => "flat",
            CardVariant::Outlined => "outlined",
            CardVariant::Elevated => "elevated",
            CardVariant::Subtle => "subtle",
        }
    }
}

/// Card padding density
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CardSize {
    Compact,
    #[default]
    Comfortable,
    Spacious,
}

impl CardSize {
    pub fn all() -> &'static [CardSize] {
        &[CardSize::Compact, CardSize::Comfortable, CardSize::Spacious]
    }
}

impl ClassToken for CardSize {
    fn token(&self) -> &'static str {
        match self {
            CardSize::Compact => "compact",
            CardSize::Comfortable => "comfortable",
            CardSize::Spacious => "spacious",
        }
    }
}

/// Card layout orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CardOrientation {
    /// Media above content
    #[default]
    Vertical,
    /// Media beside content
    Horizontal,
}

impl CardOrientation {
    pub fn all() -> &'static [CardOrientation] {
        &[CardOrientation::Vertical, CardOrientation::Horizontal]
    }
}

impl ClassToken for CardOrientation {
    fn token(&self) -> &'static str {
        match self {
            CardOrientation::Vertical => "vertical",
            CardOrientation::Horizontal => "horizontal",
        }
    }
}

/// Keys a clickable card reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKey {
    Enter,
    Space,
    Other,
}

impl CardKey {
    /// Classify a GPUI keystroke key name
    pub fn from_key(key: &str) -> Self {
        match key {
            "enter" | "Enter" => CardKey::Enter,
            "space" | " " => CardKey::Space,
            _ => CardKey::Other,
        }
    }
}

/// What a key press on the card should trigger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyResponse {
    /// Pass the event to the custom key handler
    pub forward: bool,
    /// Invoke the click callback
    pub activate: bool,
}

/// Accessibility attributes derived from card props
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardAccessibility {
    pub role: Option<SharedString>,
    pub label: Option<SharedString>,
    pub focusable: bool,
    pub pressed: Option<bool>,
    pub disabled: Option<bool>,
}

/// Declarative card configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardProps {
    pub title: Option<SharedString>,
    pub subtitle: Option<SharedString>,
    pub image: Option<SharedString>,
    pub image_alt: Option<SharedString>,
    pub variant: CardVariant,
    pub size: CardSize,
    pub orientation: CardOrientation,
    pub clickable: bool,
    pub selected: bool,
    pub loading: bool,
    pub disabled: bool,
    /// Fixed width in pixels; cards size to their content otherwise
    pub width: Option<f32>,
    pub role: Option<SharedString>,
    pub aria_label: Option<SharedString>,
    pub class_name: Option<SharedString>,
}

impl CardProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn image(mut self, image: impl Into<SharedString>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn image_alt(mut self, alt: impl Into<SharedString>) -> Self {
        self.image_alt = Some(alt.into());
        self
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn orientation(mut self, orientation: CardOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn role(mut self, role: impl Into<SharedString>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<SharedString>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<SharedString>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn class_list(&self) -> ClassList {
        let mut classes = ClassList::new()
            .with(CARD.name())
            .with(CARD.modifier(self.variant.token()))
            .with(CARD.modifier(self.size.token()))
            .with(CARD.modifier(self.orientation.token()))
            .with_if(self.clickable, CARD.modifier("clickable"))
            .with_if(self.selected, CARD.modifier("selected"))
            .with_if(self.loading, CARD.modifier("loading"))
            .with_if(self.disabled, CARD.modifier("disabled"));
        classes.push_custom(self.class_name.as_ref().map(SharedString::as_str));
        classes
    }

    /// Interactions are ignored while disabled or loading
    pub fn accepts_interaction(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Whether a pointer click reaches the click callback
    pub fn accepts_click(&self) -> bool {
        self.clickable && self.accepts_interaction()
    }

    pub fn key_response(&self, key: CardKey) -> KeyResponse {
        if !self.accepts_interaction() {
            return KeyResponse::default();
        }
        KeyResponse {
            forward: true,
            activate: self.clickable && matches!(key, CardKey::Enter | CardKey::Space),
        }
    }

    pub fn accessibility(&self) -> CardAccessibility {
        CardAccessibility {
            role: self
                .role
                .clone()
                .or_else(|| self.clickable.then(|| SharedString::from("button"))),
            label: self.aria_label.clone(),
            focusable: self.clickable && !self.disabled,
            pressed: (self.clickable && self.selected).then_some(true),
            disabled: self.disabled.then_some(true),
        }
    }

    /// Alt text for the image: explicit alt, then title, then a generic label
    pub fn image_alt_text(&self) -> SharedString {
        self.image_alt
            .clone()
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| SharedString::from(DEFAULT_IMAGE_ALT))
    }

    pub fn has_header(&self) -> bool {
        self.title.is_some() || self.subtitle.is_some()
    }

    /// Whether an occluding overlay covers the content
    pub fn blocks_input(&self) -> bool {
        self.loading
    }
}

/// The focus handle a card tracks: the caller's, else one created on demand
///
/// Cards that cannot take focus never create a handle.
fn focus_target<H>(
    focusable: bool,
    explicit: Option<H>,
    create: impl FnOnce() -> H,
) -> Option<H> {
    if !focusable {
        return None;
    }
    explicit.or_else(|| Some(create()))
}

type ActivateHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;
type KeyHandler = Box<dyn Fn(&KeyDownEvent, &mut Window, &mut App) + 'static>;

/// A styled card container
#[derive(IntoElement)]
pub struct Card {
    id: ElementId,
    props: CardProps,
    media: Option<AnyElement>,
    body: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    focus_handle: Option<FocusHandle>,
    on_click: Option<ActivateHandler>,
    on_key_down: Option<KeyHandler>,
}

impl Card {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self::from_props(id, CardProps::default())
    }

    pub fn from_props(id: impl Into<ElementId>, props: CardProps) -> Self {
        Self {
            id: id.into(),
            props,
            media: None,
            body: Vec::new(),
            footer: Vec::new(),
            focus_handle: None,
            on_click: None,
            on_key_down: None,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.props.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.props.subtitle = Some(subtitle.into());
        self
    }

    /// Image source (path or URL)
    pub fn image(mut self, image: impl Into<SharedString>) -> Self {
        self.props.image = Some(image.into());
        self
    }

    pub fn image_alt(mut self, alt: impl Into<SharedString>) -> Self {
        self.props.image_alt = Some(alt.into());
        self
    }

    /// Custom media element, used instead of `image`
    pub fn media(mut self, media: impl IntoElement) -> Self {
        self.media = Some(media.into_any_element());
        self
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.props.variant = variant;
        self
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.props.size = size;
        self
    }

    pub fn orientation(mut self, orientation: CardOrientation) -> Self {
        self.props.orientation = orientation;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.props.clickable = clickable;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.props.selected = selected;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.props.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    /// Fixed width in pixels
    pub fn width(mut self, width: f32) -> Self {
        self.props.width = Some(width);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<SharedString>) -> Self {
        self.props.class_name = Some(class_name.into());
        self
    }

    pub fn role(mut self, role: impl Into<SharedString>) -> Self {
        self.props.role = Some(role.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<SharedString>) -> Self {
        self.props.aria_label = Some(label.into());
        self
    }

    /// Add a body child
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.body.push(child.into_any_element());
        self
    }

    /// Add a footer child
    pub fn footer(mut self, child: impl IntoElement) -> Self {
        self.footer.push(child.into_any_element());
        self
    }

    /// Track focus through the given handle instead of a card-owned one
    pub fn focus_handle(mut self, handle: FocusHandle) -> Self {
        self.focus_handle = Some(handle);
        self
    }

    /// Callback for pointer clicks and Enter/Space on clickable cards
    pub fn on_click(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Custom key handler, invoked before built-in activation
    pub fn on_key_down(
        mut self,
        handler: impl Fn(&KeyDownEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_key_down = Some(Box::new(handler));
        self
    }

    pub fn props(&self) -> &CardProps {
        &self.props
    }
}

fn section(sheet: &StyleSheet, element: &str) -> Div {
    sheet
        .resolve(&ClassList::new().with(CARD.element(element)))
        .apply(div())
}

impl RenderOnce for Card {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let Card {
            id,
            props,
            media,
            body,
            footer,
            focus_handle,
            on_click,
            on_key_down,
        } = self;

        let a11y = props.accessibility();
        let focus_handle = focus_target(a11y.focusable, focus_handle, || {
            window
                .use_keyed_state(id.clone(), cx, |_, cx| cx.focus_handle().tab_stop(true))
                .read(cx)
                .clone()
        });

        let sheet = StyleSheet::current(cx);
        let style = sheet.resolve(&props.class_list());

        let mut root = style
            .apply(div().id(id).relative().overflow_hidden())
            .when_some(props.width, |el, width| el.w(px(width)));

        if props.clickable {
            if props.accepts_interaction() {
                if let Some(hover_bg) = style.hover_background {
                    root = root.hover(move |s| s.bg(hover_bg));
                }
            }

            if let Some(handle) = focus_handle.as_ref() {
                root = root.track_focus(handle);
            }

            let accepts_click = props.accepts_click();
            let click_handler = on_click.clone();
            root = root.on_click(move |_event: &ClickEvent, window, cx| {
                if !accepts_click {
                    return;
                }
                if let Some(handler) = click_handler.as_ref() {
                    handler(window, cx);
                }
            });

            let key_props = props.clone();
            root = root.on_key_down(move |event: &KeyDownEvent, window, cx| {
                let response = key_props.key_response(CardKey::from_key(&event.keystroke.key));
                if response.forward {
                    if let Some(handler) = on_key_down.as_ref() {
                        handler(event, window, cx);
                    }
                }
                if response.activate {
                    cx.stop_propagation();
                    if let Some(handler) = on_click.as_ref() {
                        handler(window, cx);
                    }
                }
            });
        }

        // Media section
        let media = media.or_else(|| {
            props.image.clone().map(|src| {
                let alt = props.image_alt_text();
                let image_style = sheet.resolve(&ClassList::new().with(CARD.element("image")));
                image_style
                    .apply(img(src).w_full().max_h(px(220.0)))
                    .with_fallback(move || {
                        div()
                            .p_4()
                            .text_sm()
                            .text_color(AkColors::text_muted())
                            .child(alt.clone())
                            .into_any_element()
                    })
                    .into_any_element()
            })
        });

        let header = props.has_header().then(|| {
            section(sheet, "header")
                .when_some(props.title.clone(), |el, title| {
                    el.child(section(sheet, "title").child(title))
                })
                .when_some(props.subtitle.clone(), |el, subtitle| {
                    el.child(section(sheet, "subtitle").child(subtitle))
                })
        });

        let content = section(sheet, "content")
            .flex_1()
            .when_some(header, |el, header| el.child(header))
            .when(!body.is_empty(), |el| {
                el.child(section(sheet, "body").flex().flex_col().gap_2().children(body))
            })
            .when(!footer.is_empty(), |el| {
                el.child(section(sheet, "footer").items_center().children(footer))
            });

        root.when_some(media, |el, media| {
            el.child(section(sheet, "media").flex_shrink_0().child(media))
        })
        .child(content)
        .when(props.blocks_input(), |el| {
            let spinner_color = sheet
                .resolve(&ClassList::new().with(CARD.element("loading-spinner")))
                .text
                .unwrap_or_else(AkColors::brand);
            el.child(
                section(sheet, "loading-overlay")
                    .id(LOADING_OVERLAY_ID)
                    .occlude()
                    .absolute()
                    .inset_0()
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        section(sheet, "loading-spinner")
                            .child(Spinner::new("card-spinner").size(32.0).color(spinner_color)),
                    ),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classes() {
        let props = CardProps::new();
        assert_eq!(
            props.class_list().to_string(),
            "card card--outlined card--comfortable card--vertical"
        );
    }

    #[test]
    fn state_flags_add_modifiers() {
        let props = CardProps::new()
            .variant(CardVariant::Elevated)
            .orientation(CardOrientation::Horizontal)
            .clickable(true)
            .selected(true)
            .loading(true)
            .disabled(true)
            .class_name("custom-card");
        let classes = props.class_list();
        for token in [
            "card",
            "card--elevated",
            "card--horizontal",
            "card--clickable",
            "card--selected",
            "card--loading",
            "card--disabled",
            "custom-card",
        ] {
            assert!(classes.contains(token), "missing {token}");
        }
    }

    #[test]
    fn enter_and_space_activate_clickable_card() {
        let props = CardProps::new().clickable(true);
        for key in ["enter", "space", " "] {
            let response = props.key_response(CardKey::from_key(key));
            assert!(response.activate, "{key} should activate");
            assert!(response.forward);
        }
        let other = props.key_response(CardKey::from_key("a"));
        assert!(!other.activate);
        assert!(other.forward);
        assert!(props.accepts_click());
    }

    #[test]
    fn disabled_or_loading_card_ignores_input() {
        for props in [
            CardProps::new().clickable(true).disabled(true),
            CardProps::new().clickable(true).loading(true),
        ] {
            assert!(!props.accepts_click());
            assert_eq!(props.key_response(CardKey::Enter), KeyResponse::default());
            assert_eq!(props.key_response(CardKey::Other), KeyResponse::default());
        }
    }

    #[test]
    fn static_card_forwards_keys_without_activation() {
        let props = CardProps::new();
        let response = props.key_response(CardKey::Enter);
        assert!(response.forward);
        assert!(!response.activate);
        assert!(!props.accepts_click());
    }

    #[test]
    fn accessibility_reflects_flags() {
        let plain = CardProps::new().accessibility();
        assert_eq!(plain.role, None);
        assert!(!plain.focusable);
        assert_eq!(plain.pressed, None);
        assert_eq!(plain.disabled, None);

        let selected = CardProps::new().clickable(true).selected(true).accessibility();
        assert_eq!(selected.role.as_ref().map(|r| r.as_str()), Some("button"));
        assert!(selected.focusable);
        assert_eq!(selected.pressed, Some(true));

        let disabled = CardProps::new().clickable(true).disabled(true).accessibility();
        assert!(!disabled.focusable);
        assert_eq!(disabled.disabled, Some(true));

        let custom = CardProps::new().clickable(true).role("link").accessibility();
        assert_eq!(custom.role.as_ref().map(|r| r.as_str()), Some("link"));

        // selected without clickable is styling only
        let styled_only = CardProps::new().selected(true).accessibility();
        assert_eq!(styled_only.pressed, None);
    }

    #[test]
    fn image_alt_falls_back_to_title_then_default() {
        let explicit = CardProps::new().title("Title").image_alt("Alt");
        assert_eq!(explicit.image_alt_text().to_string(), "Alt");

        let titled = CardProps::new().title("Title");
        assert_eq!(titled.image_alt_text().to_string(), "Title");

        assert_eq!(
            CardProps::new().image_alt_text().to_string(),
            DEFAULT_IMAGE_ALT
        );
    }

    #[test]
    fn loading_overlay_blocks_input() {
        let loading = CardProps::new()
            .clickable(true)
            .loading(true);
        assert!(loading.blocks_input());
        assert!(!loading.accepts_click());
        assert_eq!(loading.key_response(CardKey::Space), KeyResponse::default());

        assert!(!CardProps::new().clickable(true).blocks_input());
        assert!(!CardProps::new().disabled(true).blocks_input());
    }

    #[test]
    fn focusable_cards_get_a_handle_without_one_supplied() {
        let props = CardProps::new().clickable(true);
        let focusable = props.accessibility().focusable;
        assert_eq!(focus_target(focusable, None, || 7), Some(7));
        assert_eq!(focus_target(focusable, Some(3), || 7), Some(3));
    }

    #[test]
    fn unfocusable_cards_never_create_a_handle() {
        for props in [
            CardProps::new(),
            CardProps::new().clickable(true).disabled(true),
        ] {
            let target = focus_target(props.accessibility().focusable, None, || -> u32 {
                panic!("handle created for an unfocusable card")
            });
            assert_eq!(target, None);
        }
    }

    #[test]
    fn header_only_with_title_or_subtitle() {
        assert!(!CardProps::new().has_header());
        assert!(CardProps::new().subtitle("sub").has_header());
    }

    #[test]
    fn every_emitted_token_has_a_style_rule() {
        let sheet = StyleSheet::default_sheet();
        for variant in CardVariant::all() {
            for size in CardSize::all() {
                for orientation in CardOrientation::all() {
                    let props = CardProps::new()
                        .variant(*variant)
                        .size(*size)
                        .orientation(*orientation)
                        .clickable(true)
                        .selected(true)
                        .loading(true)
                        .disabled(true);
                    for token in props.class_list().iter() {
                        assert!(sheet.has_rule(token), "missing rule for {token}");
                    }
                }
            }
        }
        for element in [
            "loading-overlay",
            "loading-spinner",
            "media",
            "image",
            "content",
            "header",
            "title",
            "subtitle",
            "body",
            "footer",
        ] {
            assert!(sheet.has_rule(&CARD.element(element)), "missing {element}");
        }
    }
}
