//! StyleSheet - Class Token to Style Rule Mapping
//!
//! The sheet is the native counterpart of a component stylesheet: every class
//! token a component emits has a rule here. Rules are merged in class-list
//! order, so later tokens override earlier ones.

use std::sync::OnceLock;

use ahash::AHashMap;
use gpui::{px, App, FontWeight, Global, Rgba, Styled};

use crate::style::ClassList;
use crate::theme::colors::AkColors;
use crate::theme::typography::Typography;

/// Box shadow depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elevation {
    None,
    Small,
    Medium,
    Large,
}

/// Main-axis direction for flex containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

/// A set of optional style properties attached to one class token
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleRule {
    pub background: Option<Rgba>,
    pub hover_background: Option<Rgba>,
    pub text: Option<Rgba>,
    pub border: Option<Rgba>,
    /// Border width in pixels (1 or 2)
    pub border_width: Option<u8>,
    pub radius: Option<f32>,
    pub padding_x: Option<f32>,
    pub padding_y: Option<f32>,
    pub gap: Option<f32>,
    pub text_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub opacity: Option<f32>,
    pub elevation: Option<Elevation>,
    pub full_width: Option<bool>,
    pub direction: Option<Direction>,
    pub interactive: Option<bool>,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bg(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    pub fn hover_bg(mut self, color: Rgba) -> Self {
        self.hover_background = Some(color);
        self
    }

    pub fn text(mut self, color: Rgba) -> Self {
        self.text = Some(color);
        self
    }

    pub fn border(mut self, color: Rgba, width: u8) -> Self {
        self.border = Some(color);
        self.border_width = Some(width);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn padding(mut self, x: f32, y: f32) -> Self {
        self.padding_x = Some(x);
        self.padding_y = Some(y);
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = Some(true);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = Some(interactive);
        self
    }

    /// Overlay `other` on top of `self`; properties set in `other` win
    pub fn merge(&mut self, other: &StyleRule) {
        self.background = other.background.or(self.background);
        self.hover_background = other.hover_background.or(self.hover_background);
        self.text = other.text.or(self.text);
        self.border = other.border.or(self.border);
        self.border_width = other.border_width.or(self.border_width);
        self.radius = other.radius.or(self.radius);
        self.padding_x = other.padding_x.or(self.padding_x);
        self.padding_y = other.padding_y.or(self.padding_y);
        self.gap = other.gap.or(self.gap);
        self.text_size = other.text_size.or(self.text_size);
        self.font_weight = other.font_weight.or(self.font_weight);
        self.opacity = other.opacity.or(self.opacity);
        self.elevation = other.elevation.or(self.elevation);
        self.full_width = other.full_width.or(self.full_width);
        self.direction = other.direction.or(self.direction);
        self.interactive = other.interactive.or(self.interactive);
    }

    /// Apply the resolved rule to a styled element
    pub fn apply<E: Styled>(&self, mut el: E) -> E {
        if let Some(direction) = self.direction {
            el = match direction {
                Direction::Row => el.flex().flex_row(),
                Direction::Column => el.flex().flex_col(),
            };
        }
        if let Some(color) = self.background {
            el = el.bg(color);
        }
        if let Some(color) = self.text {
            el = el.text_color(color);
        }
        if let Some(color) = self.border {
            el = match self.border_width {
                Some(2) => el.border_2(),
                Some(0) => el,
                _ => el.border_1(),
            };
            el = el.border_color(color);
        }
        if let Some(radius) = self.radius {
            el = el.rounded(px(radius));
        }
        if let Some(x) = self.padding_x {
            el = el.px(px(x));
        }
        if let Some(y) = self.padding_y {
            el = el.py(px(y));
        }
        if let Some(gap) = self.gap {
            el = el.gap(px(gap));
        }
        if let Some(size) = self.text_size {
            el = el.text_size(px(size));
        }
        if let Some(weight) = self.font_weight {
            el = el.font_weight(weight);
        }
        if let Some(opacity) = self.opacity {
            el = el.opacity(opacity);
        }
        el = match self.elevation {
            Some(Elevation::Small) => el.shadow_sm(),
            Some(Elevation::Medium) => el.shadow_md(),
            Some(Elevation::Large) => el.shadow_lg(),
            Some(Elevation::None) | None => el,
        };
        if self.full_width == Some(true) {
            el = el.w_full();
        }
        if self.interactive == Some(true) {
            el = el.cursor_pointer();
        }
        el
    }
}

/// Token → rule table, installed as a GPUI global
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: AHashMap<String, StyleRule>,
}

impl Global for StyleSheet {}

static DEFAULT_SHEET: OnceLock<StyleSheet> = OnceLock::new();

impl StyleSheet {
    /// Create an empty sheet
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add or replace the rule for a token
    pub fn insert(&mut self, token: impl Into<String>, rule: StyleRule) {
        self.rules.insert(token.into(), rule);
    }

    /// Builder-style insert
    pub fn rule(mut self, token: impl Into<String>, rule: StyleRule) -> Self {
        self.insert(token, rule);
        self
    }

    /// Lookup the rule for a token
    pub fn get(&self, token: &str) -> Option<&StyleRule> {
        self.rules.get(token)
    }

    /// Check whether a token has a rule
    pub fn has_rule(&self, token: &str) -> bool {
        self.rules.contains_key(token)
    }

    /// Merge the rules of every known token in class-list order
    ///
    /// Tokens without a rule (custom classes) are skipped.
    pub fn resolve(&self, classes: &ClassList) -> StyleRule {
        let mut resolved = StyleRule::default();
        for token in classes.iter() {
            if let Some(rule) = self.rules.get(token) {
                resolved.merge(rule);
            }
        }
        resolved
    }

    /// The built-in sheet, created once
    pub fn default_sheet() -> &'static StyleSheet {
        DEFAULT_SHEET.get_or_init(build_default_sheet)
    }

    /// The sheet installed on the app, falling back to the built-in one
    pub fn current(cx: &App) -> &StyleSheet {
        match cx.try_global::<StyleSheet>() {
            Some(sheet) => sheet,
            None => Self::default_sheet(),
        }
    }
}

fn build_default_sheet() -> StyleSheet {
    let mut sheet = StyleSheet::empty();
    add_button_rules(&mut sheet);
    add_card_rules(&mut sheet);
    add_app_bar_rules(&mut sheet);
    sheet
}

fn add_button_rules(sheet: &mut StyleSheet) {
    sheet.insert(
        "akgui-button",
        StyleRule::new()
            .direction(Direction::Row)
            .radius(24.0)
            .weight(FontWeight::SEMIBOLD)
            .gap(6.0)
            .interactive(true),
    );

    // Variants
    sheet.insert(
        "akgui-button--primary",
        StyleRule::new()
            .bg(AkColors::brand())
            .text(AkColors::text_light())
            .hover_bg(AkColors::brand_hover()),
    );
    sheet.insert(
        "akgui-button--secondary",
        StyleRule::new()
            .bg(AkColors::surface())
            .text(AkColors::brand())
            .border(AkColors::brand(), 1)
            .hover_bg(AkColors::secondary_hover()),
    );
    sheet.insert(
        "akgui-button--ghost",
        StyleRule::new()
            .bg(AkColors::transparent())
            .text(AkColors::text_secondary())
            .hover_bg(AkColors::ghost_hover()),
    );
    sheet.insert(
        "akgui-button--danger",
        StyleRule::new()
            .bg(AkColors::danger())
            .text(AkColors::text_light())
            .hover_bg(AkColors::danger_hover()),
    );

    // Sizes
    sheet.insert(
        "akgui-button--small",
        StyleRule::new().padding(12.0, 4.0).text_size(Typography::TEXT_XS),
    );
    sheet.insert(
        "akgui-button--medium",
        StyleRule::new().padding(16.0, 6.0).text_size(Typography::TEXT_SM),
    );
    sheet.insert(
        "akgui-button--large",
        StyleRule::new().padding(24.0, 10.0).text_size(Typography::TEXT_BASE),
    );

    // States
    sheet.insert(
        "akgui-button--disabled",
        StyleRule::new().opacity(0.5).interactive(false),
    );
    // Loading buttons are also disabled and take its opacity
    sheet.insert("akgui-button--loading", StyleRule::new());
    sheet.insert("akgui-button--full-width", StyleRule::new().full_width());
    sheet.insert("akgui-button--with-start-icon", StyleRule::new().gap(8.0));
    sheet.insert("akgui-button--with-end-icon", StyleRule::new().gap(8.0));

    // Elements
    sheet.insert("akgui-button__loading-icon", StyleRule::new());
    sheet.insert("akgui-button__start-icon", StyleRule::new());
    sheet.insert("akgui-button__content", StyleRule::new());
    sheet.insert("akgui-button__end-icon", StyleRule::new());
}

fn add_card_rules(sheet: &mut StyleSheet) {
    sheet.insert(
        "card",
        StyleRule::new()
            .direction(Direction::Column)
            .bg(AkColors::surface())
            .text(AkColors::text_primary())
            .radius(8.0),
    );

    // Variants
    sheet.insert("card--flat", StyleRule::new().elevation(Elevation::None));
    sheet.insert("card--outlined", StyleRule::new().border(AkColors::border(), 1));
    sheet.insert("card--elevated", StyleRule::new().elevation(Elevation::Medium));
    sheet.insert("card--subtle", StyleRule::new().bg(AkColors::surface_subtle()));

    // Sizes
    sheet.insert("card--compact", StyleRule::new().padding(12.0, 12.0).gap(8.0));
    sheet.insert("card--comfortable", StyleRule::new().padding(16.0, 16.0).gap(12.0));
    sheet.insert("card--spacious", StyleRule::new().padding(24.0, 24.0).gap(16.0));

    // Orientation
    sheet.insert("card--vertical", StyleRule::new().direction(Direction::Column));
    sheet.insert("card--horizontal", StyleRule::new().direction(Direction::Row));

    // States
    sheet.insert(
        "card--clickable",
        StyleRule::new().interactive(true).hover_bg(AkColors::surface_subtle()),
    );
    sheet.insert(
        "card--selected",
        StyleRule::new().border(AkColors::brand(), 2).bg(AkColors::brand_tint()),
    );
    sheet.insert("card--loading", StyleRule::new().interactive(false));
    sheet.insert(
        "card--disabled",
        StyleRule::new().opacity(0.6).interactive(false),
    );

    // Elements
    sheet.insert(
        "card__loading-overlay",
        StyleRule::new().bg(AkColors::loading_overlay()),
    );
    sheet.insert("card__loading-spinner", StyleRule::new().text(AkColors::brand()));
    sheet.insert("card__media", StyleRule::new());
    sheet.insert("card__image", StyleRule::new().radius(8.0));
    sheet.insert("card__content", StyleRule::new().direction(Direction::Column).gap(8.0));
    sheet.insert("card__header", StyleRule::new().direction(Direction::Column).gap(2.0));
    sheet.insert(
        "card__title",
        StyleRule::new()
            .text_size(Typography::TEXT_LG)
            .weight(FontWeight::SEMIBOLD),
    );
    sheet.insert(
        "card__subtitle",
        StyleRule::new()
            .text_size(Typography::TEXT_SM)
            .text(AkColors::text_secondary()),
    );
    sheet.insert("card__body", StyleRule::new().text_size(Typography::TEXT_SM));
    sheet.insert(
        "card__footer",
        StyleRule::new().direction(Direction::Row).gap(8.0),
    );
}

fn add_app_bar_rules(sheet: &mut StyleSheet) {
    sheet.insert(
        "appbar",
        StyleRule::new()
            .direction(Direction::Column)
            .bg(AkColors::surface())
            .text(AkColors::text_primary())
            .full_width(),
    );

    // Position and variant
    sheet.insert("appbar--static", StyleRule::new());
    sheet.insert("appbar--sticky", StyleRule::new().elevation(Elevation::Small));
    sheet.insert("appbar--fixed", StyleRule::new().elevation(Elevation::Small));
    sheet.insert("appbar--default", StyleRule::new().border(AkColors::border(), 1));
    sheet.insert("appbar--elevated", StyleRule::new().elevation(Elevation::Medium));

    // Elements
    sheet.insert(
        "appbar__container",
        StyleRule::new().direction(Direction::Row).padding(16.0, 8.0).gap(16.0),
    );
    sheet.insert(
        "appbar__brand",
        StyleRule::new().direction(Direction::Row).gap(8.0).interactive(true),
    );
    sheet.insert("appbar__logo", StyleRule::new());
    sheet.insert(
        "appbar__title",
        StyleRule::new()
            .text_size(Typography::TEXT_LG)
            .weight(FontWeight::BOLD)
            .text(AkColors::brand()),
    );
    sheet.insert("appbar__nav", StyleRule::new().direction(Direction::Row));
    sheet.insert("appbar__nav--mobile", StyleRule::new());
    sheet.insert("appbar__menu", StyleRule::new().direction(Direction::Row).gap(4.0));
    sheet.insert("appbar__menu-item", StyleRule::new());
    sheet.insert(
        "appbar__menu-link",
        StyleRule::new()
            .padding(12.0, 6.0)
            .radius(4.0)
            .text_size(Typography::TEXT_SM)
            .text(AkColors::text_secondary())
            .hover_bg(AkColors::ghost_hover())
            .interactive(true),
    );
    sheet.insert(
        "appbar__menu-link--active",
        StyleRule::new().text(AkColors::brand()).weight(FontWeight::SEMIBOLD),
    );
    sheet.insert(
        "appbar__menu-link--disabled",
        StyleRule::new().opacity(0.4).interactive(false),
    );
    sheet.insert(
        "appbar__actions",
        StyleRule::new().direction(Direction::Row).gap(8.0),
    );
    sheet.insert("appbar__action-button", StyleRule::new());
    sheet.insert(
        "appbar__mobile-toggle",
        StyleRule::new().padding(8.0, 8.0).radius(4.0).interactive(true),
    );
    sheet.insert(
        "appbar__mobile-toggle--open",
        StyleRule::new().bg(AkColors::ghost_hover()),
    );
    sheet.insert("appbar__hamburger", StyleRule::new().text(AkColors::text_primary()));
    sheet.insert(
        "appbar__mobile-menu",
        StyleRule::new()
            .bg(AkColors::surface())
            .border(AkColors::border(), 1)
            .elevation(Elevation::Medium),
    );
    sheet.insert(
        "appbar__mobile-nav",
        StyleRule::new().direction(Direction::Column).padding(8.0, 8.0),
    );
    sheet.insert(
        "appbar__mobile-menu-list",
        StyleRule::new().direction(Direction::Column).gap(2.0),
    );
    sheet.insert("appbar__mobile-menu-item", StyleRule::new());
    sheet.insert(
        "appbar__mobile-menu-link",
        StyleRule::new()
            .padding(12.0, 10.0)
            .text_size(Typography::TEXT_BASE)
            .full_width()
            .hover_bg(AkColors::ghost_hover())
            .interactive(true),
    );
    sheet.insert(
        "appbar__mobile-menu-link--active",
        StyleRule::new().text(AkColors::brand()).bg(AkColors::brand_tint()),
    );
    sheet.insert(
        "appbar__mobile-menu-link--disabled",
        StyleRule::new().opacity(0.4).interactive(false),
    );
    sheet.insert("appbar__overlay", StyleRule::new().bg(AkColors::overlay()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_tokens_override_earlier_ones() {
        let sheet = StyleSheet::empty()
            .rule("base", StyleRule::new().opacity(1.0).radius(4.0))
            .rule("faded", StyleRule::new().opacity(0.5));

        let resolved = sheet.resolve(&ClassList::new().with("base").with("faded"));
        assert_eq!(resolved.opacity, Some(0.5));
        assert_eq!(resolved.radius, Some(4.0));

        let reversed = sheet.resolve(&ClassList::new().with("faded").with("base"));
        assert_eq!(reversed.opacity, Some(1.0));
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let sheet = StyleSheet::empty().rule("known", StyleRule::new().gap(3.0));
        let resolved = sheet.resolve(&ClassList::new().with("custom").with("known"));
        assert_eq!(resolved, StyleRule::new().gap(3.0));
    }

    #[test]
    fn disabled_button_rule_turns_off_pointer() {
        let sheet = StyleSheet::default_sheet();
        let classes = ClassList::new()
            .with("akgui-button")
            .with("akgui-button--primary")
            .with("akgui-button--disabled");
        let resolved = sheet.resolve(&classes);
        assert_eq!(resolved.interactive, Some(false));
        assert_eq!(resolved.opacity, Some(0.5));
        assert_eq!(resolved.background, Some(AkColors::brand()));
    }

    #[test]
    fn loading_button_fades_like_disabled() {
        let sheet = StyleSheet::default_sheet();
        let classes = ClassList::new()
            .with("akgui-button")
            .with("akgui-button--primary")
            .with("akgui-button--disabled")
            .with("akgui-button--loading");
        let resolved = sheet.resolve(&classes);
        assert_eq!(resolved.opacity, Some(0.5));
        assert_eq!(resolved.interactive, Some(false));
    }
}
