//! State - GPUI Entity State Modules
//!
//! Each state module holds one piece of playground state, split by update
//! frequency so observers only re-render when their slice changes.

pub mod layout_state;
pub mod navigation_state;
