//! Primitive Components
//!
//! Basic building blocks like buttons and spinners.

pub mod button;
pub mod spinner;
