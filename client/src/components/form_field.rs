//! Labelled input row with a leading icon and an inline error message.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::util::validation::Field;

/// Form row wrapper. `children` renders the input and any trailing controls.
#[component]
pub fn FormField(
    field: Field,
    label: &'static str,
    icon: IconKind,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    let label_class = move || {
        if error.with(Option::is_some) { "form-label form-label--error" } else { "form-label" }
    };

    view! {
        <div class="form-item">
            <label class=label_class for=field.name()>
                {label}
            </label>
            <div class="form-control">
                <span class="form-control__icon">
                    <Icon kind=icon/>
                </span>
                {children()}
            </div>
            <Show when=move || error.with(Option::is_some)>
                <p class="form-message" id=format!("{}-message", field.name())>
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
