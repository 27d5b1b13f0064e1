//! Theme - Palette, Typography and the Class Token Style Sheet

pub mod colors;
pub mod stylesheet;
pub mod typography;
