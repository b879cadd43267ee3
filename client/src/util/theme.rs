//! Theme preference persistence and document application.
//!
//! Reads the stored preference from `localStorage` and applies a
//! `data-theme` attribute plus a `dark` class to the `<html>` element.
//! Writing a new theme stores it back under the same key. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Storage and DOM calls only exist in hydrate builds. A failed `localStorage`
//! write is logged and otherwise ignored, since the in-memory theme signal is
//! already correct. Server renders always start from `Theme::Light`, and the
//! app corrects it after hydration.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Resolve a stored preference string, falling back to the system setting.
///
/// Anything other than `light` or `dark` (including `system` or no value)
/// defers to `prefers_dark`.
pub fn resolve_preference(stored: Option<&str>, prefers_dark: bool) -> Theme {
    stored
        .and_then(Theme::parse)
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Read the theme preference from localStorage.
///
/// Returns the stored theme, or the system `prefers-color-scheme` when no
/// explicit theme is stored. Outside the browser this is always `Light`.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        resolve_preference(stored.as_deref(), prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Apply the theme to the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
            let _ = el.class_list().toggle_with_force("dark", theme.is_dark());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Persist the theme to localStorage.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                    log::warn!("failed to persist theme preference");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
