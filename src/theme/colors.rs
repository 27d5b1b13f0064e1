//! Colors - AKGUI Theme Colors

use gpui::{rgb, rgba, Rgba};

/// AKGUI color palette - All colors are accessed via associated functions
pub struct AkColors;

impl AkColors {
    // Brand colors
    /// Brand blue
    pub fn brand() -> Rgba { rgb(0x0a66c2) }
    /// Brand blue (hover)
    pub fn brand_hover() -> Rgba { rgb(0x004182) }
    /// Brand tint for selections
    pub fn brand_tint() -> Rgba { rgba(0x0a66c21a) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf4f2ee) }
    /// Surface background (cards, panels)
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Subtle surface background
    pub fn surface_subtle() -> Rgba { rgb(0xf3f6f8) }
    /// Code block background
    pub fn code_bg() -> Rgba { rgb(0x1d2226) }
    /// Modal / menu overlay
    pub fn overlay() -> Rgba { rgba(0x00000066) }
    /// Loading overlay over card content
    pub fn loading_overlay() -> Rgba { rgba(0xffffffcc) }
    /// Fully transparent
    pub fn transparent() -> Rgba { rgba(0x00000000) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1d2226) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x5e6670) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x8c959f) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    /// Code text
    pub fn text_code() -> Rgba { rgb(0xe8eaed) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x057642) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xb24020) }
    /// Danger - Red
    pub fn danger() -> Rgba { rgb(0xcc1016) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe0dfdc) }
    /// Strong border
    pub fn border_strong() -> Rgba { rgb(0x8c8c8c) }

    // Button colors
    /// Secondary button hover background
    pub fn secondary_hover() -> Rgba { rgba(0x0a66c214) }
    /// Ghost button hover background
    pub fn ghost_hover() -> Rgba { rgba(0x00000014) }
    /// Danger button hover background
    pub fn danger_hover() -> Rgba { rgb(0x9b0d12) }
}
