//! Style - Class Token Composition
//!
//! Pure helpers that turn structured style intent into class tokens.

mod class_list;

pub use class_list::*;
