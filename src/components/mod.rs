//! Page control components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the stable-id markup the page bindings look for; they
//! hold no theme or clipboard state themselves.

pub mod copy_button;
pub mod theme_menu;
