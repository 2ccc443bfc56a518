//! Copy a page region's visible text to the system clipboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The copy button exports the rendered video details. The outcome is
//! reported through a toast; no failure escapes to the page.
//!
//! The page, clipboard and toast library are reached through small traits so
//! the flow runs off-wasm in tests. Browser implementations are hydrate-only.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use crate::state::notice::Toast;

pub const CONTENT_MISSING_TEXT: &str = "No video details available to copy.";
pub const COPIED_TEXT: &str = "Copied to clipboard.";
pub const COPY_FAILED_TEXT: &str = "Failed to copy details.";

const CONTENT_MISSING_MS: u32 = 2500;
const COPIED_MS: u32 = 2000;
const COPY_FAILED_MS: u32 = 2500;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CopyError {
    #[error("no element with id `{id}`")]
    ContentMissing { id: String },
    #[error("clipboard API not supported")]
    ClipboardUnsupported,
    #[error("clipboard write rejected: {0}")]
    ClipboardDenied(String),
}

/// Read access to rendered page text.
pub trait PageText {
    /// Visible text of the element with `id`, or `None` when it is absent.
    fn visible_text(&self, id: &str) -> Option<String>;
}

/// Asynchronous clipboard writer.
#[allow(async_fn_in_trait)]
pub trait ClipboardSink {
    async fn write_text(&self, text: &str) -> Result<(), CopyError>;
}

/// Toast display.
pub trait Notifier {
    fn notify(&self, toast: &Toast);
}

/// Copy the visible text of `element_id` and report the outcome.
pub async fn copy_element_text<P, C, N>(page: &P, clipboard: &C, notifier: &N, element_id: &str) -> Result<(), CopyError>
where
    P: PageText + ?Sized,
    C: ClipboardSink + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(text) = page.visible_text(element_id) else {
        notifier.notify(&Toast::warning(CONTENT_MISSING_TEXT, CONTENT_MISSING_MS));
        return Err(CopyError::ContentMissing { id: element_id.to_owned() });
    };

    match clipboard.write_text(&text).await {
        Ok(()) => {
            notifier.notify(&Toast::success(COPIED_TEXT, COPIED_MS));
            Ok(())
        }
        Err(err) => {
            leptos::logging::error!("could not copy text: {err}");
            notifier.notify(&Toast::error(COPY_FAILED_TEXT, COPY_FAILED_MS));
            Err(err)
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{DocumentText, NavigatorClipboard, ToastifyNotifier};

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::{Function, JSON, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{ClipboardSink, CopyError, Notifier, PageText};
    use crate::state::notice::Toast;

    /// Reads `innerText` from the current document.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct DocumentText;

    impl PageText for DocumentText {
        fn visible_text(&self, id: &str) -> Option<String> {
            let element = web_sys::window()?.document()?.get_element_by_id(id)?;
            match element.dyn_ref::<web_sys::HtmlElement>() {
                Some(html) => Some(html.inner_text()),
                None => Some(element.text_content().unwrap_or_default()),
            }
        }
    }

    /// `navigator.clipboard.writeText`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct NavigatorClipboard;

    impl ClipboardSink for NavigatorClipboard {
        async fn write_text(&self, text: &str) -> Result<(), CopyError> {
            let window = web_sys::window().ok_or(CopyError::ClipboardUnsupported)?;
            let navigator = window.navigator();
            // Insecure contexts expose no `clipboard` property at all.
            let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .ok_or(CopyError::ClipboardUnsupported)?
                .unchecked_into::<web_sys::Clipboard>();
            JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|err| CopyError::ClipboardDenied(describe(&err)))
        }
    }

    fn describe(err: &JsValue) -> String {
        err.dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| err.as_string())
            .unwrap_or_else(|| format!("{err:?}"))
    }

    /// Shows toasts through the page's global `Toastify` function.
    ///
    /// Does nothing when the library is not loaded.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct ToastifyNotifier;

    impl Notifier for ToastifyNotifier {
        fn notify(&self, toast: &Toast) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(toastify) = Reflect::get(&window, &JsValue::from_str("Toastify"))
                .ok()
                .and_then(|v| v.dyn_into::<Function>().ok())
            else {
                log::debug!("Toastify not loaded; dropping toast: {}", toast.text);
                return;
            };
            let Ok(options) = JSON::parse(&toast.toastify_options().to_string()) else {
                return;
            };
            let Ok(instance) = toastify.call1(&JsValue::NULL, &options) else {
                return;
            };
            if let Some(show) = Reflect::get(&instance, &JsValue::from_str("showToast"))
                .ok()
                .and_then(|v| v.dyn_into::<Function>().ok())
            {
                let _ = show.call0(&instance);
            }
        }
    }
}
