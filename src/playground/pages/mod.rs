//! Playground Pages

pub mod component;
pub mod home;
