//! Event wiring between page markup and the theme/clipboard behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Elements are looked up by id once at install time. Any element that is
//! missing simply gets no listener. Listeners and the controller they share
//! live for the rest of the page.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

use crate::util::config::PageConfig;
#[cfg(feature = "hydrate")]
use crate::util::clipboard::{DocumentText, NavigatorClipboard, ToastifyNotifier, copy_element_text};
#[cfg(feature = "hydrate")]
use crate::util::theme_controller::ThemeController;
#[cfg(feature = "hydrate")]
use crate::util::theme_dom::{DARK_SCHEME_QUERY, DomSurface};
#[cfg(feature = "hydrate")]
use crate::util::theme_store::BrowserStore;

#[cfg(feature = "hydrate")]
type SharedController = Rc<RefCell<ThemeController<BrowserStore, DomSurface>>>;

#[cfg(feature = "hydrate")]
fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::debug!("{event} listener not attached: {err:?}");
        return;
    }
    // Page-lifetime listener.
    cb.forget();
}

#[cfg(feature = "hydrate")]
fn event_node(event: &web_sys::Event) -> Option<web_sys::Node> {
    event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok())
}

#[cfg(feature = "hydrate")]
fn system_query(window: &web_sys::Window) -> Option<web_sys::MediaQueryList> {
    window.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

/// Apply the stored theme and attach all page listeners.
pub fn install(config: &PageConfig) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let query = system_query(&window);
        let system_dark = query.as_ref().map_or(false, web_sys::MediaQueryList::matches);
        let surface = DomSurface::new(document.clone(), config);
        let mut controller = ThemeController::new(BrowserStore, surface, config.storage_keys(), system_dark)
            .with_selection(config.selection);
        controller.init();
        let controller: SharedController = Rc::new(RefCell::new(controller));

        bind_theme_controls(&document, config, &controller);
        if let Some(query) = query {
            subscribe_system_scheme(query, &controller);
        }
        bind_copy_button(&document, config);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

#[cfg(feature = "hydrate")]
fn bind_theme_controls(document: &web_sys::Document, config: &PageConfig, controller: &SharedController) {
    let toggle = document.get_element_by_id(&config.toggle_id);
    let menu = document.get_element_by_id(&config.menu_id);

    match &toggle {
        Some(toggle) => {
            let ctl = Rc::clone(controller);
            listen(toggle, "click", move |event| {
                event.stop_propagation();
                ctl.borrow_mut().activate_toggle();
            });
        }
        None => log::debug!("#{} not found; theme toggle not wired", config.toggle_id),
    }

    match &menu {
        Some(menu) => {
            let ctl = Rc::clone(controller);
            listen(menu, "click", move |event| {
                let Some(option) = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.closest("[data-theme-value]").ok().flatten())
                else {
                    return;
                };
                if let Some(value) = option.get_attribute("data-theme-value") {
                    let _ = ctl.borrow_mut().select_preference_value(&value);
                }
            });
        }
        None => log::debug!("#{} not found; theme menu not wired", config.menu_id),
    }

    if let (Some(toggle), Some(menu)) = (toggle, menu) {
        let ctl = Rc::clone(controller);
        listen(document, "click", move |event| {
            let node = event_node(&event);
            let inside = menu.contains(node.as_ref()) || toggle.contains(node.as_ref());
            ctl.borrow_mut().handle_pointer(inside);
        });
    }

    let ctl = Rc::clone(controller);
    listen(document, "keydown", move |event| {
        if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            ctl.borrow_mut().handle_key(&key_event.key());
        }
    });
}

#[cfg(feature = "hydrate")]
fn subscribe_system_scheme(query: web_sys::MediaQueryList, controller: &SharedController) {
    let ctl = Rc::clone(controller);
    let source = query.clone();
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        ctl.borrow_mut().handle_system_change(source.matches());
    });
    let attached = query
        .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
        .is_ok();
    if !attached {
        // Older Safari only exposes the deprecated `addListener`.
        #[allow(deprecated)]
        let legacy = query.add_listener_with_opt_callback(Some(cb.as_ref().unchecked_ref()));
        if legacy.is_err() {
            log::debug!("color-scheme change events unavailable");
        }
    }
    cb.forget();
}

#[cfg(feature = "hydrate")]
fn bind_copy_button(document: &web_sys::Document, config: &PageConfig) {
    let Some(button) = document.get_element_by_id(&config.copy_button_id) else {
        log::debug!("#{} not found; copy button not wired", config.copy_button_id);
        return;
    };
    let content_id = config.content_id.clone();
    listen(&button, "click", move |_event| {
        let content_id = content_id.clone();
        leptos::task::spawn_local(async move {
            // Outcome already surfaced as a toast.
            let _ = copy_element_text(&DocumentText, &NavigatorClipboard, &ToastifyNotifier, &content_id).await;
        });
    });
}
