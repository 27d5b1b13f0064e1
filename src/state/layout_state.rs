//! LayoutState - Playground Sidebar Visibility
//!
//! The sidebar opens automatically when the window becomes desktop-sized and
//! closes when it becomes mobile-sized. Between those transitions the header
//! toggle controls it freely.

use crate::viewport::Breakpoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    breakpoint: Breakpoint,
    /// `None` until the first width arrives
    mobile: Option<bool>,
    sidebar_open: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(Breakpoint::default())
    }
}

impl LayoutState {
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            mobile: None,
            sidebar_open: false,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile.unwrap_or(false)
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Sidebar drawn over the content with a dismissing overlay
    pub fn shows_overlay(&self) -> bool {
        self.sidebar_open && self.is_mobile()
    }

    /// Apply a window width, returning whether anything visible changed
    pub fn on_resize(&mut self, width: f32) -> bool {
        let mobile = self.breakpoint.is_mobile(width);
        if self.mobile == Some(mobile) {
            return false;
        }
        self.mobile = Some(mobile);
        self.sidebar_open = !mobile;
        tracing::debug!(width, mobile, "Playground layout changed");
        true
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) -> bool {
        std::mem::replace(&mut self.sidebar_open, false)
    }

    /// A sidebar link was followed; the drawer only closes on mobile
    pub fn on_navigate(&mut self) -> bool {
        if self.is_mobile() {
            self.close_sidebar()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_width_sets_initial_visibility() {
        let mut desktop = LayoutState::default();
        assert!(desktop.on_resize(1280.0));
        assert!(desktop.is_sidebar_open());
        assert!(!desktop.shows_overlay());

        let mut mobile = LayoutState::default();
        assert!(mobile.on_resize(500.0));
        assert!(!mobile.is_sidebar_open());
    }

    #[test]
    fn toggle_survives_resizes_within_mode() {
        let mut state = LayoutState::default();
        state.on_resize(1280.0);
        state.toggle_sidebar();
        assert!(!state.on_resize(1000.0));
        assert!(!state.is_sidebar_open());
    }

    #[test]
    fn crossing_breakpoint_resets_visibility() {
        let mut state = LayoutState::default();
        state.on_resize(500.0);
        state.toggle_sidebar();
        assert!(state.shows_overlay());

        assert!(state.on_resize(900.0));
        assert!(state.is_sidebar_open());
        assert!(state.on_resize(700.0));
        assert!(!state.is_sidebar_open());
    }

    #[test]
    fn navigation_closes_only_on_mobile() {
        let mut state = LayoutState::default();
        state.on_resize(1280.0);
        assert!(!state.on_navigate());
        assert!(state.is_sidebar_open());

        let mut state = LayoutState::new(Breakpoint(1000.0));
        state.on_resize(900.0);
        state.toggle_sidebar();
        assert!(state.on_navigate());
        assert!(!state.is_sidebar_open());
    }
}
