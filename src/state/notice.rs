//! Transient notification (toast) model.
//!
//! Toasts are rendered by the page's Toastify script; this module only owns
//! the message shape and the Toastify options it maps to.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use serde::Serialize;

const TOAST_FOREGROUND: &str = "#f8fafc";

/// Visual tier of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTier {
    Warning,
    Success,
    Error,
}

impl NoticeTier {
    /// Background color for this tier.
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Warning => "#d97706",
            Self::Success => "#15803d",
            Self::Error => "#b91c1c",
        }
    }
}

/// Vertical screen edge a toast is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    Top,
    #[default]
    Bottom,
}

/// Horizontal placement of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Center,
    #[default]
    Right,
}

/// A short-lived, dismissible message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub duration_ms: u32,
    pub gravity: Gravity,
    pub position: Position,
    pub close: bool,
    pub tier: NoticeTier,
}

#[derive(Serialize)]
struct ToastStyle<'a> {
    background: &'a str,
    color: &'a str,
}

#[derive(Serialize)]
struct ToastifyOptions<'a> {
    text: &'a str,
    duration: u32,
    gravity: Gravity,
    position: Position,
    close: bool,
    style: ToastStyle<'a>,
}

impl Toast {
    /// Bottom-right dismissible toast of `tier`.
    pub fn new(tier: NoticeTier, text: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            text: text.into(),
            duration_ms,
            gravity: Gravity::default(),
            position: Position::default(),
            close: true,
            tier,
        }
    }

    pub fn warning(text: impl Into<String>, duration_ms: u32) -> Self {
        Self::new(NoticeTier::Warning, text, duration_ms)
    }

    pub fn success(text: impl Into<String>, duration_ms: u32) -> Self {
        Self::new(NoticeTier::Success, text, duration_ms)
    }

    pub fn error(text: impl Into<String>, duration_ms: u32) -> Self {
        Self::new(NoticeTier::Error, text, duration_ms)
    }

    /// Options object passed to `Toastify(...)`.
    #[must_use]
    pub fn toastify_options(&self) -> serde_json::Value {
        let options = ToastifyOptions {
            text: &self.text,
            duration: self.duration_ms,
            gravity: self.gravity,
            position: self.position,
            close: self.close,
            style: ToastStyle { background: self.tier.background(), color: TOAST_FOREGROUND },
        };
        serde_json::to_value(options).unwrap_or(serde_json::Value::Null)
    }
}
