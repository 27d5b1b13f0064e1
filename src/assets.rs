//! Embedded assets for the AKGUI playground
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;
use std::borrow::Cow;

use crate::components::layout::app_bar::{CLOSE_ICON, MENU_ICON};
use crate::components::primitives::spinner::SPINNER_ICON;
use crate::playground::code_block::{CHECK_ICON, COPY_ICON};
use crate::playground::layout::header::LOGO_ICON;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

/// Icons shipped with the library and playground
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Logo,
    Menu,
    Close,
    Copy,
    Check,
    Spinner,
}

impl IconName {
    pub fn all() -> &'static [IconName] {
        &[
            IconName::Logo,
            IconName::Menu,
            IconName::Close,
            IconName::Copy,
            IconName::Check,
            IconName::Spinner,
        ]
    }

    /// Get the SVG path for this icon
    pub fn path(self) -> &'static str {
        match self {
            IconName::Logo => LOGO_ICON,
            IconName::Menu => MENU_ICON,
            IconName::Close => CLOSE_ICON,
            IconName::Copy => COPY_ICON,
            IconName::Check => CHECK_ICON,
            IconName::Spinner => SPINNER_ICON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_is_embedded() {
        for icon in IconName::all() {
            assert!(Assets::get(icon.path()).is_some(), "missing {}", icon.path());
        }
    }

    #[test]
    fn empty_path_loads_nothing() {
        assert!(matches!(Assets.load(""), Ok(None)));
        assert!(Assets.load("icons/missing.svg").is_err());
    }

    #[test]
    fn list_filters_by_prefix() {
        let icons = Assets.list("icons/").unwrap_or_default();
        assert_eq!(icons.len(), IconName::all().len());
    }
}
