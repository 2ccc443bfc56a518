//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::copy_button::{CopyButton, DetailsPanel};
use crate::components::theme_menu::ThemeMenu;

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

/// Root application component: navbar with the theme picker, details panel
/// and copy control.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/transcript-ui.css"/>
        <Title text="Transcript"/>

        <nav id="navbar" class="navbar">
            <span class="navbar__brand">"Transcript"</span>
            <span class="navbar__spacer"></span>
            <ThemeMenu/>
        </nav>
        <main class="page">
            <DetailsPanel>
                <p class="details-panel__empty">"No video details loaded yet."</p>
            </DetailsPanel>
            <CopyButton/>
        </main>
    }
}
