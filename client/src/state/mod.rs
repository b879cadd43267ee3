//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`login_form`, `theme`) so components depend on
//! small focused models that can be tested without a browser.

pub mod login_form;
pub mod theme;
