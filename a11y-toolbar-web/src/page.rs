//! Browser implementation of the toolbar's page seam
use crate::dom;
use a11y_toolbar_core::constants::{STYLE_ELEMENT_ID, TOAST_CSS, TOAST_ELEMENT_ID};
use a11y_toolbar_core::{Page, parse_css_px};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, SpeechSynthesis, SpeechSynthesisUtterance};

/// The live document. Stateless: every call looks nodes up again, so it
/// tolerates the page replacing or removing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

fn style_element() -> Option<Element> {
    let doc = dom::document()?;
    if let Some(existing) = doc.get_element_by_id(STYLE_ELEMENT_ID) {
        return Some(existing);
    }
    let style = doc.create_element("style").ok()?;
    style.set_id(STYLE_ELEMENT_ID);
    dom::log_js_error("style type", style.set_attribute("type", "text/css"));
    doc.head()?.append_child(&style).ok()?;
    Some(style)
}

fn toast_element() -> Option<HtmlElement> {
    if let Some(existing) = dom::html_element_by_id(TOAST_ELEMENT_ID) {
        return Some(existing);
    }
    let doc = dom::document()?;
    let toast = doc
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    toast.set_id(TOAST_ELEMENT_ID);
    toast.style().set_css_text(TOAST_CSS);
    dom::log_js_error("toast role", toast.set_attribute("role", "status"));
    dom::log_js_error("toast live", toast.set_attribute("aria-live", "polite"));
    doc.body()?.append_child(&toast).ok()?;
    Some(toast)
}

fn speech() -> Option<SpeechSynthesis> {
    let win = dom::window()?;
    let present = js_sys::Reflect::has(&win, &JsValue::from_str("speechSynthesis")).unwrap_or(false);
    if !present {
        return None;
    }
    win.speech_synthesis().ok()
}

impl Page for BrowserPage {
    fn body_font_size_px(&self) -> Option<f64> {
        let win = dom::window()?;
        let body = dom::body()?;
        let computed = win.get_computed_style(&body).ok().flatten()?;
        computed
            .get_property_value("font-size")
            .ok()
            .and_then(|value| parse_css_px(&value))
    }

    fn ensure_style(&self) {
        let _ = style_element();
    }

    fn set_style_text(&self, css: &str) {
        if let Some(style) = style_element() {
            style.set_text_content(Some(css));
        }
    }

    fn remove_style(&self) {
        if let Some(style) = dom::document().and_then(|doc| doc.get_element_by_id(STYLE_ELEMENT_ID))
        {
            style.remove();
        }
    }

    fn set_body_class(&self, class: &str, enabled: bool) {
        if let Some(body) = dom::body() {
            dom::log_js_error(
                "body class",
                body.class_list()
                    .toggle_with_force(class, enabled)
                    .map(|_| ()),
            );
        }
    }

    fn cookie_header(&self) -> String {
        dom::html_document()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    fn write_cookie(&self, cookie: &str) {
        if let Some(doc) = dom::html_document() {
            dom::log_js_error("cookie", doc.set_cookie(cookie));
        }
    }

    fn show_toast(&self, message: &str) {
        if let Some(toast) = toast_element() {
            toast.set_text_content(Some(message));
            dom::log_js_error("toast show", toast.style().set_property("opacity", "1"));
        }
    }

    fn fade_toast(&self) {
        if let Some(toast) = dom::html_element_by_id(TOAST_ELEMENT_ID) {
            dom::log_js_error("toast fade", toast.style().set_property("opacity", "0"));
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn text_at_point(&self, x: f64, y: f64) -> Option<String> {
        dom::document()?
            .element_from_point(x as f32, y as f32)?
            .text_content()
    }

    fn speech_available(&self) -> bool {
        speech().is_some()
    }

    fn speak(&self, text: &str, lang: &str) {
        let Some(synth) = speech() else {
            return;
        };
        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                utterance.set_lang(lang);
                synth.speak(&utterance);
            }
            Err(err) => log::warn!("utterance: {}", dom::js_error_message(&err)),
        }
    }

    fn cancel_speech(&self) {
        if let Some(synth) = speech() {
            synth.cancel();
        }
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}
