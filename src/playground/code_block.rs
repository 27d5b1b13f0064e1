//! CodeBlock - Copyable Source Display
//!
//! Shows a code listing with a copy button. A successful copy flips the
//! button to a check mark for a short while.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, svg, ClickEvent, ClipboardItem, Context, IntoElement, ParentElement,
    Render, SharedString, Styled, Window,
};

use crate::constants::COPY_FEEDBACK_MS;
use crate::error::{Error, Result};
use crate::theme::colors::AkColors;
use crate::theme::typography::Typography;

pub const COPY_ICON: &str = "icons/copy.svg";
pub const CHECK_ICON: &str = "icons/check.svg";

/// Clipboard contents for `text`; empty listings are rejected
pub fn clipboard_item(text: &str) -> Result<ClipboardItem> {
    if text.trim().is_empty() {
        return Err(Error::Clipboard {
            message: "nothing to copy".to_string(),
        });
    }
    Ok(ClipboardItem::new_string(text.to_string()))
}

/// Copy confirmation state
///
/// Every successful copy starts a new generation; a reset only applies to
/// the generation it was scheduled for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyState {
    copied: bool,
    generation: u64,
}

impl CopyState {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Record a copy attempt, returning the generation to reset on success
    pub fn record(&mut self, result: Result<()>) -> Option<u64> {
        match result {
            Ok(()) => {
                self.copied = true;
                self.generation += 1;
                Some(self.generation)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to copy code");
                None
            }
        }
    }

    /// Clear the confirmation if `generation` is still current
    pub fn reset(&mut self, generation: u64) -> bool {
        if self.copied && self.generation == generation {
            self.copied = false;
            true
        } else {
            false
        }
    }
}

pub struct CodeBlock {
    code: SharedString,
    title: Option<SharedString>,
    language: SharedString,
    copy: CopyState,
}

impl CodeBlock {
    pub fn new(code: impl Into<SharedString>) -> Self {
        Self {
            code: code.into(),
            title: None,
            language: SharedString::from("rust"),
            copy: CopyState::default(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn language(mut self, language: impl Into<SharedString>) -> Self {
        self.language = language.into();
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn copy_state(&self) -> CopyState {
        self.copy
    }

    pub fn copy_to_clipboard(&mut self, cx: &mut Context<Self>) {
        let result = clipboard_item(&self.code).map(|item| cx.write_to_clipboard(item));
        let Some(generation) = self.copy.record(result) else {
            return;
        };
        cx.notify();

        cx.spawn(async move |this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(COPY_FEEDBACK_MS))
                .await;
            let _ = this.update(cx, |this, cx| {
                if this.copy.reset(generation) {
                    cx.notify();
                }
            });
        })
        .detach();
    }

    fn render_copy_button(&self, floating: bool, cx: &Context<Self>) -> impl IntoElement {
        let copied = self.copy.is_copied();
        let (icon, color) = if copied {
            (CHECK_ICON, AkColors::success())
        } else {
            (COPY_ICON, AkColors::text_muted())
        };

        div()
            .id(if floating { "copy-button-floating" } else { "copy-button" })
            .p_1()
            .rounded_md()
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff1a)))
            .when(floating, |el| el.absolute().top_2().right_2())
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.copy_to_clipboard(cx);
            }))
            .child(svg().path(icon).size(px(16.0)).text_color(color))
    }
}

impl Render for CodeBlock {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let lines: Vec<SharedString> = self
            .code
            .lines()
            .map(|line| {
                if line.is_empty() {
                    SharedString::from(" ")
                } else {
                    SharedString::from(line.to_string())
                }
            })
            .collect();

        let header = self.title.clone().map(|title| {
            div()
                .flex()
                .flex_row()
                .items_center()
                .justify_between()
                .px_3()
                .py_1()
                .border_b_1()
                .border_color(gpui::rgba(0xffffff1a))
                .child(
                    div()
                        .flex()
                        .flex_row()
                        .gap_2()
                        .items_center()
                        .child(
                            div()
                                .text_size(px(Typography::TEXT_XS))
                                .font_weight(gpui::FontWeight::SEMIBOLD)
                                .text_color(AkColors::text_code())
                                .child(title),
                        )
                        .child(
                            div()
                                .text_size(px(Typography::TEXT_XS))
                                .text_color(AkColors::text_muted())
                                .child(self.language.clone()),
                        ),
                )
                .child(self.render_copy_button(false, cx))
        });
        let floating = self.title.is_none();

        div()
            .w_full()
            .rounded_lg()
            .overflow_hidden()
            .bg(AkColors::code_bg())
            .children(header)
            .child(
                div()
                    .id("code-content")
                    .relative()
                    .p_3()
                    .overflow_x_scroll()
                    .font_family(Typography::FONT_MONO)
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(AkColors::text_code())
                    .children(lines.into_iter().map(|line| div().child(line)))
                    .when(floating, |el| el.child(self.render_copy_button(true, cx))),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_copy_confirms_until_reset() {
        let mut state = CopyState::default();
        let generation = state.record(Ok(()));
        assert!(state.is_copied());
        assert_eq!(generation, Some(1));

        assert!(generation.is_some_and(|g| state.reset(g)));
        assert!(!state.is_copied());
    }

    #[test]
    fn failed_copy_stays_unconfirmed() {
        let mut state = CopyState::default();
        let generation = state.record(Err(Error::Clipboard {
            message: "denied".to_string(),
        }));
        assert_eq!(generation, None);
        assert!(!state.is_copied());
    }

    #[test]
    fn stale_reset_is_ignored() {
        let mut state = CopyState::default();
        let first = state.record(Ok(()));
        let second = state.record(Ok(()));

        assert!(!first.is_some_and(|g| state.reset(g)));
        assert!(state.is_copied());
        assert!(second.is_some_and(|g| state.reset(g)));
        assert!(!state.is_copied());
    }

    #[test]
    fn clipboard_item_carries_the_listing() {
        let item = clipboard_item("Button::new(\"ok\", \"Ok\")");
        assert_eq!(
            item.ok().and_then(|item| item.text()).as_deref(),
            Some("Button::new(\"ok\", \"Ok\")")
        );
    }

    #[test]
    fn empty_listing_is_not_copied() {
        let mut state = CopyState::default();
        let result = clipboard_item("  \n").map(|_| ());
        assert!(matches!(result, Err(Error::Clipboard { .. })));
        assert_eq!(state.record(result), None);
        assert!(!state.is_copied());
    }

    #[test]
    fn failure_keeps_previous_confirmation() {
        let mut state = CopyState::default();
        let first = state.record(Ok(()));
        state.record(Err(Error::Clipboard {
            message: "busy".to_string(),
        }));
        assert!(state.is_copied());
        assert!(first.is_some_and(|g| state.reset(g)));
    }
}
