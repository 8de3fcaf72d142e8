use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlDocument, HtmlElement, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document of the current window.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// The document as an `HtmlDocument`, which exposes `document.cookie`.
#[must_use]
pub fn html_document() -> Option<HtmlDocument> {
    document().and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
}

#[must_use]
pub fn body() -> Option<HtmlElement> {
    document().and_then(|doc| doc.body())
}

/// Element by id, cast to `HtmlElement`.
#[must_use]
pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Viewport width in CSS pixels (`window.innerWidth`).
#[must_use]
pub fn viewport_width() -> Option<f64> {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log a failed DOM call and carry on.
pub fn log_js_error(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{context}: {}", js_error_message(&err));
    }
}
