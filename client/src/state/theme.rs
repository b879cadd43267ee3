//! Shared light/dark theme preference.
//!
//! DESIGN
//! ======
//! The theme flag is owned by the app root and injected into pages as a
//! `RwSignal<ThemeState>` context. Pages only talk to it through
//! `ThemeProvider`, so storage and document side effects stay in
//! `util::theme` and tests can substitute an in-memory provider.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

/// Binary light/dark preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Choices offered by the theme menu, in display order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse the stored string form. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Menu label for this theme.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Logo variant rendered on top of this theme.
    pub fn logo(self) -> LogoAsset {
        match self {
            Self::Light => LIGHT_LOGO,
            Self::Dark => DARK_LOGO,
        }
    }
}

/// A build-time image asset served from the site root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoAsset {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const LIGHT_LOGO: LogoAsset = LogoAsset { src: "/Bulkee-light.png", alt: "Logo", width: 130, height: 120 };
pub const DARK_LOGO: LogoAsset = LogoAsset { src: "/Bulkee-dark.png", alt: "Logo", width: 130, height: 120 };

/// Theme context state.
#[derive(Clone, Debug, Default)]
pub struct ThemeState {
    pub theme: Theme,
}

/// Read/write access to the shared theme flag.
pub trait ThemeProvider {
    fn theme(&self) -> Theme;
    fn set_theme(&self, theme: Theme);
}

impl ThemeProvider for RwSignal<ThemeState> {
    fn theme(&self) -> Theme {
        self.with(|s| s.theme)
    }

    fn set_theme(&self, theme: Theme) {
        self.update(|s| s.theme = theme);
        crate::util::theme::apply(theme);
        crate::util::theme::persist(theme);
        log::debug!("theme set to {}", theme.as_str());
    }
}
