//! Built-in component demos

pub mod app_bar;
pub mod button;
pub mod card;

/// Installation command shown in every documentation tab
pub const INSTALLATION: &str = "cargo add akgui";
