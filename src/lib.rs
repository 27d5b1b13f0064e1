//! AKGUI Component Library
//!
//! A small native component kit (Button, Card, AppBar) for GPUI, plus the
//! playground application that renders live examples and prop tables.

pub mod app;
pub mod assets;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod playground;
pub mod state;
pub mod style;
pub mod theme;
pub mod viewport;

pub use components::{
    ActionButton, AppBar, AppBarEvent, AppBarLogo, AppBarPosition, AppBarProps, AppBarVariant,
    Button, ButtonProps, ButtonSize, ButtonVariant, Card, CardOrientation, CardProps, CardSize,
    CardVariant, MenuItem, Spinner,
};
pub use style::{Block, ClassList, ClassToken};
pub use theme::stylesheet::StyleSheet;
pub use viewport::{Breakpoint, Viewport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
