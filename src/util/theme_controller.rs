//! Theme preference controller.
//!
//! ARCHITECTURE
//! ============
//! One controller is built per page load. It owns the storage backend, the
//! rendering surface and the in-memory [`ThemeState`]. State transitions are
//! synchronous; every change that affects the rendered theme ends in exactly
//! one [`ThemeSurface::render`] call.
//!
//! The in-memory preference is the authority for the current page view. It
//! matches storage whenever writes succeed, and keeps the page consistent
//! when they do not.

#[cfg(test)]
#[path = "theme_controller_test.rs"]
mod theme_controller_test;

use crate::state::theme::{EffectiveTheme, SelectionMode, ThemeParseError, ThemePreference, ThemeState, ThemeView};
use crate::util::theme_store::{PreferenceStore, StorageKeys, read_preference, write_preference};

/// Rendering side of the controller.
pub trait ThemeSurface {
    /// Reflect the effective theme and the preference onto the page.
    fn render(&mut self, view: &ThemeView);
    /// Show or hide the selection menu.
    fn set_menu_open(&mut self, open: bool);
    /// Whether the page currently shows the selection menu.
    fn menu_open(&self) -> bool;
}

const ESCAPE_KEY: &str = "Escape";

pub struct ThemeController<S, R> {
    store: S,
    surface: R,
    keys: StorageKeys,
    mode: SelectionMode,
    state: ThemeState,
}

impl<S: PreferenceStore, R: ThemeSurface> ThemeController<S, R> {
    pub fn new(store: S, surface: R, keys: StorageKeys, system_dark: bool) -> Self {
        Self {
            store,
            surface,
            keys,
            mode: SelectionMode::default(),
            state: ThemeState { system_dark, ..ThemeState::default() },
        }
    }

    #[must_use]
    pub fn with_selection(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Load the stored preference and render it. Called once at page load.
    ///
    /// The menu's open state is taken from the page, which may have been
    /// rendered with it showing.
    pub fn init(&mut self) {
        self.state.menu_open = self.surface.menu_open();
        let preference = self.get_preference();
        self.apply(preference);
    }

    /// Stored preference, `system` when absent or unreadable.
    pub fn get_preference(&self) -> ThemePreference {
        read_preference(&self.store, &self.keys)
    }

    /// Persist `value`. A failed write still updates the in-memory preference.
    pub fn set_preference(&mut self, value: ThemePreference) {
        if let Err(err) = write_preference(&self.store, &self.keys, value) {
            leptos::logging::log!("theme preference not persisted: {err}");
        }
        self.state.preference = value;
    }

    /// Validate a raw UI value, then persist it.
    pub fn set_preference_value(&mut self, raw: &str) -> Result<(), ThemeParseError> {
        let value = raw.parse()?;
        self.set_preference(value);
        Ok(())
    }

    pub fn compute_effective(&self, preference: ThemePreference) -> EffectiveTheme {
        preference.resolve(self.state.system_dark)
    }

    pub fn apply(&mut self, preference: ThemePreference) {
        self.state.preference = preference;
        let view = ThemeView::new(preference, self.compute_effective(preference));
        self.surface.render(&view);
    }

    /// Advance `system -> light -> dark -> system`, persist and apply.
    pub fn cycle_preference(&mut self) -> ThemePreference {
        let next = self.state.preference.next();
        self.set_preference(next);
        self.apply(next);
        next
    }

    /// Menu selection: persist, apply, close the menu.
    pub fn select_preference(&mut self, value: ThemePreference) {
        self.set_preference(value);
        self.apply(value);
        self.close_menu();
    }

    /// Menu selection from a `data-theme-value` attribute. Unknown values are
    /// ignored and leave the menu as it is.
    pub fn select_preference_value(&mut self, raw: &str) -> Result<(), ThemeParseError> {
        let value = raw.parse()?;
        self.select_preference(value);
        Ok(())
    }

    /// OS color-scheme change. Explicit preferences are never overridden.
    pub fn handle_system_change(&mut self, dark: bool) {
        if self.state.observe_system(dark) {
            self.apply(self.state.preference);
        }
    }

    /// Click on the theme toggle.
    pub fn activate_toggle(&mut self) {
        match self.mode {
            SelectionMode::Menu => self.toggle_menu(),
            SelectionMode::Cycle => {
                self.cycle_preference();
            }
        }
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        self.surface.set_menu_open(self.state.menu_open);
    }

    pub fn close_menu(&mut self) {
        if self.state.menu_open {
            self.state.menu_open = false;
            self.surface.set_menu_open(false);
        }
    }

    /// Pointer interaction anywhere on the page. `inside` is true when it hit
    /// the menu or its toggle.
    pub fn handle_pointer(&mut self, inside: bool) {
        if !inside {
            self.close_menu();
        }
    }

    pub fn handle_key(&mut self, key: &str) {
        if key == ESCAPE_KEY {
            self.close_menu();
        }
    }
}
