//! # transcript-ui
//!
//! Leptos + WASM page controls for the transcript viewer: a light/dark/system
//! theme preference persisted in `localStorage`, and a button that copies the
//! video details panel to the clipboard.
//!
//! Pure state lives in `state`, browser seams and wiring in `util`, and the
//! markup the wiring attaches to in `components`.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
fn init_console() {
    console_error_panic_hook::set_once();
    // A second entry point on the same page finds the logger already set.
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Hydrate the Leptos app, then wire its controls.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_console();
    leptos::mount::hydrate_body(app::App);
    util::page_bindings::install(&util::config::PageConfig::default());
}

/// Wire controls on a server-rendered page.
///
/// `config_json` optionally overrides element ids, storage keys and the
/// selection mode; an invalid value falls back to the defaults.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn enhance(config_json: Option<String>) {
    init_console();
    let config = match config_json.as_deref().map(util::config::PageConfig::from_json) {
        None => util::config::PageConfig::default(),
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            leptos::logging::warn!("{err}; using default page config");
            util::config::PageConfig::default()
        }
    };
    util::page_bindings::install(&config);
}
