//! Theme preference model and its pure transitions.
//!
//! DESIGN
//! ======
//! The stored preference (`system`/`light`/`dark`) is kept separate from the
//! effective theme that actually gets rendered. Everything here is plain data
//! so the transition rules can be exercised without a browser; the DOM side
//! lives in `util::theme_dom`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The user's stored theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the operating system's color scheme.
    #[default]
    #[serde(alias = "auto")]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// All preferences in cycling and menu order.
    pub const ALL: [Self; 3] = [Self::System, Self::Light, Self::Dark];

    /// Canonical storage/attribute spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Short label used for menu entries.
    #[must_use]
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Next preference in the `system -> light -> dark` cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    /// Interpret a value written under the legacy storage key.
    ///
    /// Earlier versions only ever stored `light` or `dark` there.
    #[must_use]
    pub fn from_legacy(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Resolve against the OS color-scheme signal.
    #[must_use]
    pub fn resolve(self, system_dark: bool) -> EffectiveTheme {
        match self {
            Self::System if system_dark => EffectiveTheme::Dark,
            Self::System | Self::Light => EffectiveTheme::Light,
            Self::Dark => EffectiveTheme::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a UI or storage value is not a known preference.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference `{0}`")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemePreference {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" | "auto" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

/// The concretely rendered theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Icon shown on the theme toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    Auto,
    Moon,
    Sun,
}

/// Everything the rendering side needs for one theme application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeView {
    pub preference: ThemePreference,
    pub effective: EffectiveTheme,
    pub icon: ToggleIcon,
    pub label: String,
}

impl ThemeView {
    /// Build the view for `preference` resolved to `effective`.
    ///
    /// The label tells "system, currently dark" apart from "explicitly dark".
    #[must_use]
    pub fn new(preference: ThemePreference, effective: EffectiveTheme) -> Self {
        let icon = match (preference, effective) {
            (ThemePreference::System, _) => ToggleIcon::Auto,
            (_, EffectiveTheme::Dark) => ToggleIcon::Moon,
            (_, EffectiveTheme::Light) => ToggleIcon::Sun,
        };
        let label = match (preference, effective) {
            (ThemePreference::System, EffectiveTheme::Dark) => "Automatic (dark)".to_owned(),
            (ThemePreference::System, EffectiveTheme::Light) => "Automatic (light)".to_owned(),
            (_, EffectiveTheme::Dark) => "Dark mode".to_owned(),
            (_, EffectiveTheme::Light) => "Light mode".to_owned(),
        };
        Self { preference, effective, icon, label }
    }

    /// Whether the root dark-mode indicator should be set.
    #[must_use]
    pub fn dark(&self) -> bool {
        self.effective.is_dark()
    }

    /// Text for the toggle's `title` and `aria-label`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("Theme: {}", self.label)
    }

    /// Whether a menu option tagged with `value` is the active one.
    #[must_use]
    pub fn is_active_option(&self, value: &str) -> bool {
        value.parse::<ThemePreference>().is_ok_and(|p| p == self.preference)
    }
}

/// In-memory theme state for one page view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub system_dark: bool,
    pub menu_open: bool,
}

impl ThemeState {
    #[must_use]
    pub fn effective(&self) -> EffectiveTheme {
        self.preference.resolve(self.system_dark)
    }

    #[must_use]
    pub fn view(&self) -> ThemeView {
        ThemeView::new(self.preference, self.effective())
    }

    /// Record a new OS signal. Returns `true` when the rendered theme must be
    /// refreshed, which only happens while following the system.
    pub fn observe_system(&mut self, dark: bool) -> bool {
        self.system_dark = dark;
        self.preference == ThemePreference::System
    }
}

/// How a click on the theme toggle is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// The toggle opens a menu of the three preferences.
    #[default]
    Menu,
    /// The toggle advances through the preferences in order.
    Cycle,
}
