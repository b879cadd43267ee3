//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure rule logic
//! from page and component code to improve reuse and testability.

pub mod theme;
pub mod validation;
