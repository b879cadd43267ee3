//! Static landing route reached after a valid login submission.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Home"</h1>
            <a href="/" class="btn btn--outline">
                "Back to login"
            </a>
        </div>
    }
}
