//! Playground - Live Component Demos
//!
//! Demo registry, routing and the generic renderer that turns a component
//! config into tabbed examples and documentation.

pub mod catalog;
pub mod code_block;
pub mod component_tabs;
pub mod demo_element;
pub mod demo_page;
pub mod demo_view;
pub mod demos;
pub mod layout;
pub mod pages;
pub mod registry;
pub mod routes;
pub mod snippet;
pub mod types;
