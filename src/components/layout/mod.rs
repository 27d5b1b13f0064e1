//! Layout Components
//!
//! Page-level chrome such as the app bar.

pub mod app_bar;
