//! Copy-to-clipboard control and the region it exports.

use leptos::prelude::*;

use crate::util::config::{CONTENT_ID, COPY_BUTTON_ID};

/// Button that copies the details panel's visible text.
#[component]
pub fn CopyButton() -> impl IntoView {
    view! {
        <button id=COPY_BUTTON_ID type="button" class="btn btn-copy" title="Copy details">
            "Copy details"
        </button>
    }
}

/// Region whose text the copy button exports.
#[component]
pub fn DetailsPanel(children: Children) -> impl IntoView {
    view! {
        <section id=CONTENT_ID class="details-panel">
            {children()}
        </section>
    }
}
