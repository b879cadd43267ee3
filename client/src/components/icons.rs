//! Inline stroke icons used by the login card.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Mail,
    RectangleEllipsis,
    Eye,
    EyeClosed,
    Sun,
    Moon,
}

impl IconKind {
    /// Path data on a 24x24 grid.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::RectangleEllipsis => &[
                "M4 6h16a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
                "M12 12h.01",
                "M17 12h.01",
                "M7 12h.01",
            ],
            Self::Eye => &[
                "M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0",
                "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Self::EyeClosed => &[
                "m15 18-.722-3.25",
                "M2 8a10.645 10.645 0 0 0 20 0",
                "m20 15-1.726-2.05",
                "m4 15 1.726-2.05",
                "m9 18 .722-3.25",
            ],
            Self::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Self::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
        }
    }
}

/// Render `kind` as an inline SVG `size` pixels square.
#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = 16)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
