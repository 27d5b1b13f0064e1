//! Button Component

use gpui::{
    div, prelude::*, App, ClickEvent, Div, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::style::{Block, ClassList, ClassToken};
use crate::theme::stylesheet::StyleSheet;

/// Class block for buttons
pub const BUTTON: Block = Block("akgui-button");

/// Glyph shown in place of icons while loading
pub const LOADING_GLYPH: &str = "⟳";

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Primary action button (brand blue)
    #[default]
    Primary,
    /// Secondary button (outlined)
    Secondary,
    /// Ghost button (transparent)
    Ghost,
    /// Danger button (red)
    Danger,
}

impl ButtonVariant {
    pub fn all() -> &'static [ButtonVariant] {
        &[
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Ghost,
            ButtonVariant::Danger,
        ]
    }
}

impl ClassToken for ButtonVariant {
    fn token(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Danger => "danger",
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

impl ButtonSize {
    pub fn all() -> &'static [ButtonSize] {
        &[ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large]
    }
}

impl ClassToken for ButtonSize {
    fn token(&self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }
}

/// Declarative button configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonProps {
    pub label: SharedString,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
    pub start_icon: Option<SharedString>,
    pub end_icon: Option<SharedString>,
    pub class_name: Option<SharedString>,
}

/// Which slots a button renders, derived from its props
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonContent<'a> {
    pub spinner: bool,
    pub start_icon: Option<&'a SharedString>,
    pub label: Option<&'a SharedString>,
    pub end_icon: Option<&'a SharedString>,
}

impl ButtonProps {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn start_icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    pub fn end_icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.end_icon = Some(icon.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<SharedString>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Disabled either explicitly or while loading
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Whether a click should reach the handler
    pub fn accepts_click(&self) -> bool {
        !self.is_disabled()
    }

    pub fn class_list(&self) -> ClassList {
        let mut classes = ClassList::new()
            .with(BUTTON.name())
            .with(BUTTON.modifier(self.variant.token()))
            .with(BUTTON.modifier(self.size.token()))
            .with_if(self.is_disabled(), BUTTON.modifier("disabled"))
            .with_if(self.loading, BUTTON.modifier("loading"))
            .with_if(self.full_width, BUTTON.modifier("full-width"))
            .with_if(self.start_icon.is_some(), BUTTON.modifier("with-start-icon"))
            .with_if(self.end_icon.is_some(), BUTTON.modifier("with-end-icon"));
        classes.push_custom(self.class_name.as_ref().map(SharedString::as_str));
        classes
    }

    /// Slots to render; icons give way to the spinner while loading
    pub fn content(&self) -> ButtonContent<'_> {
        ButtonContent {
            spinner: self.loading,
            start_icon: self.start_icon.as_ref().filter(|_| !self.loading),
            label: Some(&self.label).filter(|label| !label.is_empty()),
            end_icon: self.end_icon.as_ref().filter(|_| !self.loading),
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    props: ButtonProps,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::from_props(id, ButtonProps::new(label))
    }

    /// Create a button from a prepared configuration
    pub fn from_props(id: impl Into<ElementId>, props: ButtonProps) -> Self {
        Self {
            id: id.into(),
            props,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.props.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.props.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.props.loading = loading;
        self
    }

    /// Stretch to the container width
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.props.full_width = full_width;
        self
    }

    /// Icon glyph before the label
    pub fn start_icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.props.start_icon = Some(icon.into());
        self
    }

    /// Icon glyph after the label
    pub fn end_icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.props.end_icon = Some(icon.into());
        self
    }

    /// Extra class tokens appended after the built-in ones
    pub fn class_name(mut self, class_name: impl Into<SharedString>) -> Self {
        self.props.class_name = Some(class_name.into());
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

fn slot(sheet: &StyleSheet, element: &str) -> Div {
    let classes = ClassList::new().with(BUTTON.element(element));
    sheet.resolve(&classes).apply(div().flex().items_center())
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let Button { id, props, on_click } = self;
        let sheet = StyleSheet::current(cx);
        let style = sheet.resolve(&props.class_list());
        let content = props.content();

        let mut element = style.apply(
            div()
                .id(id)
                .items_center()
                .justify_center()
                .flex_shrink_0(),
        );

        if props.accepts_click() {
            if let Some(hover_bg) = style.hover_background {
                element = element.hover(move |s| s.bg(hover_bg));
            }

            if let Some(handler) = on_click {
                element = element.on_click(handler);
            }
        }

        element
            .when(content.spinner, |el| {
                el.child(slot(sheet, "loading-icon").child(LOADING_GLYPH))
            })
            .when_some(content.start_icon.cloned(), |el, icon| {
                el.child(slot(sheet, "start-icon").child(icon))
            })
            .when_some(content.label.cloned(), |el, label| {
                el.child(slot(sheet, "content").child(label))
            })
            .when_some(content.end_icon.cloned(), |el, icon| {
                el.child(slot(sheet, "end-icon").child(icon))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_primary_medium_enabled() {
        let props = ButtonProps::new("Click me");
        let classes = props.class_list();
        assert_eq!(
            classes.to_string(),
            "akgui-button akgui-button--primary akgui-button--medium"
        );
        assert!(props.accepts_click());
    }

    #[test]
    fn danger_large_button() {
        let props = ButtonProps::new("Delete")
            .variant(ButtonVariant::Danger)
            .size(ButtonSize::Large);
        let classes = props.class_list();
        assert!(classes.contains("akgui-button--danger"));
        assert!(classes.contains("akgui-button--large"));
        assert!(!props.is_disabled());
        assert!(props.accepts_click());
    }

    #[test]
    fn disabled_iff_disabled_or_loading() {
        for (disabled, loading) in [(false, false), (true, false), (false, true), (true, true)] {
            let props = ButtonProps::new("x").disabled(disabled).loading(loading);
            assert_eq!(props.is_disabled(), disabled || loading);
            assert_eq!(props.accepts_click(), !(disabled || loading));
            assert_eq!(
                props.class_list().contains("akgui-button--disabled"),
                disabled || loading
            );
        }
    }

    #[test]
    fn loading_replaces_icons_with_spinner() {
        let props = ButtonProps::new("Save")
            .start_icon("⚡")
            .end_icon("→")
            .loading(true);
        let content = props.content();
        assert!(content.spinner);
        assert_eq!(content.start_icon, None);
        assert_eq!(content.end_icon, None);
        assert_eq!(content.label.map(|l| l.as_str()), Some("Save"));

        let classes = props.class_list();
        assert!(classes.contains("akgui-button--loading"));
        assert!(classes.contains("akgui-button--with-start-icon"));
    }

    #[test]
    fn icons_render_when_idle() {
        let props = ButtonProps::new("Next").end_icon("→");
        let content = props.content();
        assert!(!content.spinner);
        assert_eq!(content.end_icon.map(|i| i.as_str()), Some("→"));
        assert_eq!(content.start_icon, None);
    }

    #[test]
    fn empty_label_has_no_content_slot() {
        let props = ButtonProps::new("").start_icon("+");
        assert_eq!(props.content().label, None);
    }

    #[test]
    fn custom_class_comes_last() {
        let props = ButtonProps::new("x").full_width(true).class_name("custom-class");
        let tokens: Vec<_> = props.class_list().iter().map(str::to_string).collect();
        assert_eq!(tokens.last().map(String::as_str), Some("custom-class"));
        assert!(tokens.iter().any(|t| t == "akgui-button--full-width"));
    }

    #[test]
    fn every_emitted_token_has_a_style_rule() {
        let sheet = StyleSheet::default_sheet();
        for variant in ButtonVariant::all() {
            for size in ButtonSize::all() {
                let props = ButtonProps::new("x")
                    .variant(*variant)
                    .size(*size)
                    .disabled(true)
                    .loading(true)
                    .full_width(true)
                    .start_icon("a")
                    .end_icon("b");
                for token in props.class_list().iter() {
                    assert!(sheet.has_rule(token), "missing rule for {token}");
                }
            }
        }
        for element in ["loading-icon", "start-icon", "content", "end-icon"] {
            assert!(sheet.has_rule(&BUTTON.element(element)));
        }
    }
}
