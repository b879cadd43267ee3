//! Email + password login screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form validates on every keystroke and on submit. A valid submission
//! logs the entered values and performs a client-side route change to
//! `HOME_ROUTE`; there is no remote call and therefore no failure path after
//! validation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::backdrop::{Aurora, GridPattern};
use crate::components::form_field::FormField;
use crate::components::icons::{Icon, IconKind};
use crate::components::theme_menu::ThemeMenu;
use crate::state::login_form::{Credentials, LoginFormState};
use crate::state::theme::{ThemeProvider, ThemeState};
use crate::util::validation::Field;

/// Destination after a successful submission.
pub const HOME_ROUTE: &str = "/home";

/// Handle validated credentials: log them (password redacted) and navigate
/// to `HOME_ROUTE` exactly once.
///
/// `Credentials` can only be obtained from `LoginFormState::submit`, which
/// withholds them unless every field is valid.
pub fn complete_login<F>(credentials: &Credentials, navigate: F)
where
    F: FnOnce(&str),
{
    match serde_json::to_string(credentials) {
        Ok(json) => log::info!("login submitted: {json}"),
        Err(e) => log::warn!("login submitted; values not encodable: {e}"),
    }
    navigate(HOME_ROUTE);
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let form = RwSignal::new(LoginFormState::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginFormState::submit).flatten() else {
            log::debug!("login submit blocked by validation");
            return;
        };
        complete_login(&credentials, |path| navigate(path, NavigateOptions::default()));
    };

    let logo = move || theme.theme().logo();
    let email_error = Signal::derive(move || form.with(|f| f.error(Field::Email)));
    let password_error = Signal::derive(move || form.with(|f| f.error(Field::Password)));

    view! {
        <div class="login-page">
            <Aurora/>
            <GridPattern/>
            <div class="login-card">
                <header class="login-card__header">
                    <img
                        src=move || logo().src
                        alt=move || logo().alt
                        width=move || logo().width.to_string()
                        height=move || logo().height.to_string()
                    />
                </header>
                <div class="login-card__content">
                    <form class="login-form" novalidate=true on:submit=on_submit>
                        <div class="login-form__fields">
                            <FormField field=Field::Email label="Email" icon=IconKind::Mail error=email_error>
                                <input
                                    class="input"
                                    id="email"
                                    name="email"
                                    type="email"
                                    placeholder="Email"
                                    autocomplete="email"
                                    aria-invalid=move || email_error.with(Option::is_some).to_string()
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                                />
                            </FormField>
                            <FormField
                                field=Field::Password
                                label="Password"
                                icon=IconKind::RectangleEllipsis
                                error=password_error
                            >
                                <input
                                    class="input input--trailing"
                                    id="password"
                                    name="password"
                                    type=move || form.with(LoginFormState::password_input_type)
                                    placeholder="Password"
                                    autocomplete="current-password"
                                    aria-invalid=move || password_error.with(Option::is_some).to_string()
                                    prop:value=move || form.with(|f| f.password.clone())
                                    on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                                />
                                <button
                                    type="button"
                                    class="form-control__toggle"
                                    aria-label=move || {
                                        if form.with(|f| f.password_visible) { "Hide password" } else { "Show password" }
                                    }
                                    on:click=move |_| form.update(LoginFormState::toggle_password_visibility)
                                >
                                    {move || {
                                        let kind = if form.with(|f| f.password_visible) {
                                            IconKind::Eye
                                        } else {
                                            IconKind::EyeClosed
                                        };
                                        view! { <Icon kind=kind/> }
                                    }}
                                </button>
                            </FormField>
                        </div>
                        <button type="submit" class="btn btn--primary btn--block">
                            "Login"
                        </button>
                    </form>
                    <footer class="login-card__footer">
                        <ThemeMenu/>
                    </footer>
                </div>
            </div>
        </div>
    }
}
