//! Browser rendering surface for the theme controller.
//!
//! Mutates classes and attributes on elements that already exist in the page;
//! it never creates elements. Missing elements are skipped.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use crate::state::theme::{ThemeView, ToggleIcon};
#[cfg(feature = "hydrate")]
use crate::util::config::PageConfig;
#[cfg(feature = "hydrate")]
use crate::util::theme_controller::ThemeSurface;

/// Class toggled on `<html>` while the effective theme is dark.
pub const DARK_CLASS: &str = "dark";
/// Class hiding the theme menu.
pub const HIDDEN_CLASS: &str = "hidden";
/// Classes marking the active menu option.
pub const ACTIVE_OPTION_CLASSES: [&str; 4] = ["bg-slate-100", "text-slate-900", "dark:bg-slate-800", "dark:text-slate-100"];
/// Media query carrying the OS color-scheme signal.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

const AUTO_ICON: &str = r#"<svg class="h-4 w-4" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true"><path d="M4.5 4.75A2.75 2.75 0 017.25 2h5.5a2.75 2.75 0 012.75 2.75v6.5A2.75 2.75 0 0112.75 14h-1v1.25h2a.75.75 0 010 1.5h-7.5a.75.75 0 010-1.5h2V14h-1a2.75 2.75 0 01-2.75-2.75v-6.5zM7.25 3.5c-.69 0-1.25.56-1.25 1.25v6.5c0 .69.56 1.25 1.25 1.25h5.5c.69 0 1.25-.56 1.25-1.25v-6.5c0-.69-.56-1.25-1.25-1.25h-5.5z"></path></svg>"#;
const MOON_ICON: &str = r#"<svg class="h-4 w-4" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true"><path d="M17.293 13.293A8 8 0 016.707 2.707a.75.75 0 00-.87-.22A8.5 8.5 0 1017.513 14.16a.75.75 0 00-.22-.867z"></path></svg>"#;
const SUN_ICON: &str = r#"<svg class="h-4 w-4" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true"><path d="M10 4.5a.75.75 0 01.75.75v1a.75.75 0 01-1.5 0v-1A.75.75 0 0110 4.5zm0 9a.75.75 0 01.75.75v1a.75.75 0 01-1.5 0v-1A.75.75 0 0110 13.5zm5.5-3.5a.75.75 0 01.75.75v.5a.75.75 0 01-1.5 0v-.5a.75.75 0 01.75-.75zM4.5 10a.75.75 0 01.75.75v.5a.75.75 0 01-1.5 0v-.5A.75.75 0 014.5 10zm8.36-4.11a.75.75 0 011.06 0l.7.7a.75.75 0 11-1.06 1.06l-.7-.7a.75.75 0 010-1.06zm-6.78 6.78a.75.75 0 011.06 0l.7.7a.75.75 0 11-1.06 1.06l-.7-.7a.75.75 0 010-1.06zm7.48 1.76a.75.75 0 010 1.06l-.7.7a.75.75 0 11-1.06-1.06l.7-.7a.75.75 0 011.06 0zM7.14 6.3a.75.75 0 010 1.06l-.7.7A.75.75 0 115.38 7l.7-.7a.75.75 0 011.06 0zM10 7.25a3.5 3.5 0 100 7 3.5 3.5 0 000-7z"></path></svg>"#;

/// SVG markup for a toggle icon.
#[must_use]
pub fn icon_markup(icon: ToggleIcon) -> &'static str {
    match icon {
        ToggleIcon::Auto => AUTO_ICON,
        ToggleIcon::Moon => MOON_ICON,
        ToggleIcon::Sun => SUN_ICON,
    }
}

/// Inner HTML of the toggle button for `view`.
#[must_use]
pub fn toggle_markup(view: &ThemeView) -> String {
    format!(r#"{}<span class="sr-only">{}</span>"#, icon_markup(view.icon), view.label)
}

#[cfg(feature = "hydrate")]
pub struct DomSurface {
    document: web_sys::Document,
    toggle_id: String,
    menu_id: String,
    option_selector: String,
}

#[cfg(feature = "hydrate")]
impl DomSurface {
    pub fn new(document: web_sys::Document, config: &PageConfig) -> Self {
        Self {
            document,
            toggle_id: config.toggle_id.clone(),
            menu_id: config.menu_id.clone(),
            option_selector: config.option_selector(),
        }
    }

    fn render_toggle(&self, view: &ThemeView) {
        let Some(button) = self.document.get_element_by_id(&self.toggle_id) else {
            return;
        };
        let _ = button
            .class_list()
            .add_3("inline-flex", "items-center", "justify-center");
        button.set_inner_html(&toggle_markup(view));
        let title = view.title();
        let _ = button.set_attribute("title", &title);
        let _ = button.set_attribute("aria-label", &title);
    }

    fn render_options(&self, view: &ThemeView) {
        use wasm_bindgen::JsCast;

        let Ok(options) = self.document.query_selector_all(&self.option_selector) else {
            return;
        };
        for i in 0..options.length() {
            let Some(option) = options.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let active = option
                .get_attribute("data-theme-value")
                .is_some_and(|v| view.is_active_option(&v));
            let class_list = option.class_list();
            for class in ACTIVE_OPTION_CLASSES {
                let _ = class_list.toggle_with_force(class, active);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl ThemeSurface for DomSurface {
    fn render(&mut self, view: &ThemeView) {
        if let Some(root) = self.document.document_element() {
            let _ = root.class_list().toggle_with_force(DARK_CLASS, view.dark());
        }
        self.render_toggle(view);
        self.render_options(view);
    }

    fn set_menu_open(&mut self, open: bool) {
        let (Some(menu), Some(button)) = (
            self.document.get_element_by_id(&self.menu_id),
            self.document.get_element_by_id(&self.toggle_id),
        ) else {
            return;
        };
        let _ = menu.class_list().toggle_with_force(HIDDEN_CLASS, !open);
        let _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }

    fn menu_open(&self) -> bool {
        self.document
            .get_element_by_id(&self.menu_id)
            .is_some_and(|menu| !menu.class_list().contains(HIDDEN_CLASS))
    }
}
