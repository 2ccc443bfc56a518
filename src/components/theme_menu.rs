//! Theme toggle button and its preference menu.
//!
//! Renders markup only; behavior is attached by `util::page_bindings` after
//! hydration so server-rendered pages and Leptos pages share one code path.

use leptos::prelude::*;

use crate::state::theme::ThemePreference;
use crate::util::config::{THEME_MENU_ID, THEME_OPTION_CLASS, THEME_TOGGLE_ID};

/// Toggle plus a hidden menu with one option per preference.
#[component]
pub fn ThemeMenu() -> impl IntoView {
    let option_class = format!(
        "{THEME_OPTION_CLASS} block w-full px-3 py-2 text-left text-sm hover:bg-slate-100 dark:hover:bg-slate-800"
    );

    view! {
        <div class="theme-picker relative">
            <button
                id=THEME_TOGGLE_ID
                type="button"
                class="btn theme-picker__toggle"
                aria-haspopup="menu"
                aria-expanded="false"
                aria-label="Theme"
                title="Theme"
            ></button>
            <div
                id=THEME_MENU_ID
                role="menu"
                class="hidden absolute right-0 mt-2 w-36 rounded-md border bg-white shadow-lg dark:bg-slate-900"
            >
                {ThemePreference::ALL
                    .into_iter()
                    .map(|pref| {
                        view! {
                            <button
                                type="button"
                                role="menuitem"
                                class=option_class.clone()
                                data-theme-value=pref.as_str()
                            >
                                {pref.menu_label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
