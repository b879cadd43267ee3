//! Light/dark dropdown shown in the login card footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The menu never stores the theme itself. It reads and requests changes
//! through the `ThemeProvider` context installed by `App`.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::state::theme::{Theme, ThemeProvider, ThemeState};

#[component]
pub fn ThemeMenu() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let open = RwSignal::new(false);

    view! {
        <div class="theme-menu">
            <button
                type="button"
                class="btn btn--outline btn--icon"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <Icon kind=IconKind::Sun size=20 class="theme-menu__sun"/>
                <Icon kind=IconKind::Moon size=20 class="theme-menu__moon"/>
                <span class="sr-only">"Toggle theme"</span>
            </button>
            <Show when=move || open.get()>
                <div class="theme-menu__content" role="menu">
                    {Theme::ALL
                        .into_iter()
                        .map(|choice| {
                            let item_class = move || {
                                if theme.theme() == choice {
                                    "theme-menu__item theme-menu__item--active"
                                } else {
                                    "theme-menu__item"
                                }
                            };
                            view! {
                                <button
                                    type="button"
                                    role="menuitem"
                                    class=item_class
                                    on:click=move |_| {
                                        theme.set_theme(choice);
                                        open.set(false);
                                    }
                                >
                                    {choice.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
