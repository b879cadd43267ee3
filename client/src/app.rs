//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::theme::ThemeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the theme flag and provides it to every route as a context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    provide_context(theme);

    // Effects only run in the browser, after hydration, so the server-rendered
    // markup always matches the default theme. Loading does not persist: an
    // unset preference keeps following the system setting.
    Effect::new(move || {
        let preferred = crate::util::theme::read_preference();
        theme.update(|s| s.theme = preferred);
        crate::util::theme::apply(preferred);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/bulkee.css"/>
        <Title text="Bulkee"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("home") view=HomePage/>
            </Routes>
        </Router>
    }
}
