//! Playground Layout - Header and Sidebar

pub mod header;
pub mod sidebar;
