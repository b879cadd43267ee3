//! Decorative page background: an aurora gradient and a masked grid.
//!
//! The aurora is pure CSS; this module only derives the custom properties
//! the stylesheet animates (`--aurora-duration`, `--aurora-gradient`).

#[cfg(test)]
#[path = "backdrop_test.rs"]
mod backdrop_test;

use leptos::prelude::*;

/// Aurora cycle length at speed 1.0.
pub const AURORA_BASE_CYCLE_SECS: f64 = 12.0;
pub const AURORA_DEFAULT_SPEED: f64 = 1.5;
pub const AURORA_DEFAULT_STOPS: [&str; 3] = ["#d3fa85", "#aef129", "#d3fa85"];

/// Build the inline style for the aurora layer.
///
/// Non-positive or non-finite speeds fall back to the base cycle. Fewer than
/// two stops are padded so the gradient is always well formed.
pub fn aurora_style(speed: f64, color_stops: &[String]) -> String {
    let duration = if speed.is_finite() && speed > 0.0 {
        AURORA_BASE_CYCLE_SECS / speed
    } else {
        AURORA_BASE_CYCLE_SECS
    };

    let mut stops: Vec<&str> = color_stops.iter().map(String::as_str).collect();
    if stops.is_empty() {
        stops.extend(AURORA_DEFAULT_STOPS);
    }
    while stops.len() < 2 {
        stops.push(stops[0]);
    }

    format!(
        "--aurora-duration: {duration:.3}s; --aurora-gradient: linear-gradient(90deg, {});",
        stops.join(", ")
    )
}

fn default_stops() -> Vec<String> {
    AURORA_DEFAULT_STOPS.iter().map(|s| (*s).to_owned()).collect()
}

/// Animated gradient filling the viewport behind the card.
#[component]
pub fn Aurora(
    #[prop(default = AURORA_DEFAULT_SPEED)] speed: f64,
    #[prop(default = default_stops())] color_stops: Vec<String>,
) -> impl IntoView {
    let style = aurora_style(speed, &color_stops);
    view! {
        <div class="aurora" style=style aria-hidden="true">
            <div class="aurora__layer"></div>
        </div>
    }
}

/// Faint 80px grid fading out toward the edges.
#[component]
pub fn GridPattern() -> impl IntoView {
    view! {
        <svg class="grid-pattern" aria-hidden="true">
            <defs>
                <pattern id="cta" width="80" height="80" x="50%" y="-1" patternUnits="userSpaceOnUse">
                    <path d="M.5 200V.5H200" fill="none"></path>
                </pattern>
            </defs>
            <rect width="100%" height="100%" stroke-width="0" fill="url(#cta)"></rect>
        </svg>
    }
}
