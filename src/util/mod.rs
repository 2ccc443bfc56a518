//! Browser-facing helpers behind the page controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage, clipboard and DOM access sit behind small traits here so the
//! controller and copy flow stay testable without a browser.

pub mod clipboard;
pub mod config;
pub mod page_bindings;
pub mod theme_controller;
pub mod theme_dom;
pub mod theme_store;
