//! Viewport - Shared Window Width Observation
//!
//! The workspace observes window bounds once and publishes the width through a
//! `Viewport` entity. Layout-aware entities subscribe with [`subscribe`] and
//! keep the returned [`ViewportSubscription`]; dropping it unsubscribes.

use gpui::{Context, Entity, Subscription};

use crate::constants::DEFAULT_MOBILE_BREAKPOINT;

/// A pixel width threshold below which mobile layout activates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint(pub f32);

impl Breakpoint {
    /// Whether `width` falls into the mobile range (strictly below the threshold)
    pub fn is_mobile(&self, width: f32) -> bool {
        width < self.0
    }

    pub fn px(&self) -> f32 {
        self.0
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(DEFAULT_MOBILE_BREAKPOINT)
    }
}

/// Something whose layout depends on the viewport width
pub trait BreakpointAware {
    /// React to a new viewport width
    fn on_viewport_width(&mut self, width: f32);
}

/// Current viewport width
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: f32,
}

impl Viewport {
    pub fn new(width: f32) -> Self {
        Self { width }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Record a new width, returning whether it changed
    pub fn set_width(&mut self, width: f32) -> bool {
        if (self.width - width).abs() < f32::EPSILON {
            return false;
        }
        self.width = width;
        true
    }

    /// Update the entity and notify observers when the width changed
    pub fn publish<T>(viewport: &Entity<Viewport>, width: f32, cx: &mut Context<T>) {
        viewport.update(cx, |viewport, cx| {
            if viewport.set_width(width) {
                tracing::debug!(width, "Viewport resized");
                cx.notify();
            }
        });
    }
}

/// Handle for an active viewport observation
///
/// The observation lives as long as this value.
#[must_use = "dropping the subscription stops viewport updates"]
pub struct ViewportSubscription {
    _subscription: Subscription,
}

impl ViewportSubscription {
    /// Stop observing explicitly
    pub fn unsubscribe(self) {}
}

/// Observe width changes of `viewport` from the entity owning `cx`
pub fn subscribe<T: 'static>(
    viewport: &Entity<Viewport>,
    cx: &mut Context<T>,
    mut on_change: impl FnMut(&mut T, f32, &mut Context<T>) + 'static,
) -> ViewportSubscription {
    let subscription = cx.observe(viewport, move |this, viewport, cx| {
        let width = viewport.read(cx).width();
        on_change(this, width, cx);
    });

    ViewportSubscription {
        _subscription: subscription,
    }
}

/// Subscribe a [`BreakpointAware`] entity, forwarding each width and re-rendering
pub fn subscribe_aware<T: BreakpointAware + 'static>(
    viewport: &Entity<Viewport>,
    cx: &mut Context<T>,
) -> ViewportSubscription {
    subscribe(viewport, cx, |this, width, cx| {
        this.on_viewport_width(width);
        cx.notify();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        let bp = Breakpoint::default();
        assert!(bp.is_mobile(767.0));
        assert!(!bp.is_mobile(768.0));
        assert!(!bp.is_mobile(1024.0));
    }

    #[test]
    fn set_width_reports_changes_only() {
        let mut viewport = Viewport::new(1024.0);
        assert!(!viewport.set_width(1024.0));
        assert!(viewport.set_width(500.0));
        assert_eq!(viewport.width(), 500.0);
    }
}
