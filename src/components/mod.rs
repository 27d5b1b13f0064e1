//! Components - Reusable UI Components
//!
//! Prop-driven components that resolve their look through the style sheet.

pub mod composite;
pub mod layout;
pub mod primitives;

pub use composite::card::{
    Card, CardAccessibility, CardKey, CardOrientation, CardProps, CardSize, CardVariant,
};
pub use layout::app_bar::{
    ActionButton, AppBar, AppBarEvent, AppBarLogo, AppBarPosition, AppBarProps, AppBarVariant,
    MenuItem, MenuMode, ResponsiveMenu,
};
pub use primitives::button::{Button, ButtonProps, ButtonSize, ButtonVariant};
pub use primitives::spinner::Spinner;
