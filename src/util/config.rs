//! Page wiring configuration.
//!
//! Defaults match the markup rendered by `components`; server-rendered pages
//! may pass a JSON object to `enhance` to override any field.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::theme::SelectionMode;
use crate::util::theme_store::{LEGACY_STORAGE_KEY, STORAGE_KEY, StorageKeys};

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_MENU_ID: &str = "theme-menu";
pub const COPY_BUTTON_ID: &str = "copy-button";
pub const CONTENT_ID: &str = "videoDetails";
/// Class carried by each option element inside the theme menu.
pub const THEME_OPTION_CLASS: &str = "theme-option";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub legacy_storage_key: Option<String>,
    pub selection: SelectionMode,
    pub toggle_id: String,
    pub menu_id: String,
    pub copy_button_id: String,
    pub content_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            legacy_storage_key: Some(LEGACY_STORAGE_KEY.to_owned()),
            selection: SelectionMode::default(),
            toggle_id: THEME_TOGGLE_ID.to_owned(),
            menu_id: THEME_MENU_ID.to_owned(),
            copy_button_id: COPY_BUTTON_ID.to_owned(),
            content_id: CONTENT_ID.to_owned(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys { canonical: self.storage_key.clone(), legacy: self.legacy_storage_key.clone() }
    }

    /// Selector for the option elements inside the theme menu.
    #[must_use]
    pub fn option_selector(&self) -> String {
        format!("#{} .{THEME_OPTION_CLASS}", self.menu_id)
    }
}
