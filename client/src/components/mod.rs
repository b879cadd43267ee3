//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the login card chrome and background while reading
//! shared state from Leptos context providers.

pub mod backdrop;
pub mod form_field;
pub mod icons;
pub mod theme_menu;
