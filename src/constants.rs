//! UI Constants
//!
//! Centralized UI constants for consistent layout across the playground.

/// Width below which layouts switch to their mobile arrangement
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

/// Playground header height in pixels
pub const HEADER_HEIGHT: f32 = 56.0;

/// Playground sidebar width in pixels
pub const SIDEBAR_WIDTH: f32 = 260.0;

/// AppBar height in pixels
pub const APP_BAR_HEIGHT: f32 = 56.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// How long the code block shows its "copied" confirmation
pub const COPY_FEEDBACK_MS: u64 = 2000;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "akgui-playground.toml";
