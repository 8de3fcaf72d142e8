//! Accessibility toolbar wiring
//!
//! Holds the single controller for the page and exposes its operations both
//! as module exports and as the `window` globals existing page buttons call.
use crate::dom;
use crate::page::BrowserPage;
use crate::timers::BrowserTimers;
use a11y_toolbar_core::constants::{CONFIG_OVERRIDE_ELEMENT_ID, MESSAGES_OVERRIDE_ELEMENT_ID};
use a11y_toolbar_core::{A11yConfig, A11yController, ConfigError, Messages};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

pub type BrowserController = A11yController<BrowserPage, BrowserTimers>;

thread_local! {
    static CONTROLLER: RefCell<Option<BrowserController>> = const { RefCell::new(None) };
}

/// Run `f` against the installed controller. No-op before [`install`].
pub fn with_controller<R>(f: impl FnOnce(&mut BrowserController) -> R) -> Option<R> {
    CONTROLLER.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

fn json_block(id: &str) -> Option<String> {
    dom::document()?
        .get_element_by_id(id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Configuration for this page: the bundled defaults, replaced by the page's
/// `#a11y-toolbar-config` JSON block when present and valid.
pub fn load_config() -> (A11yConfig, Option<ConfigError>) {
    match json_block(CONFIG_OVERRIDE_ELEMENT_ID) {
        Some(text) => match A11yConfig::from_json(&text) {
            Ok(config) => (config, None),
            Err(err) => (A11yConfig::load_from_static(), Some(err)),
        },
        None => (A11yConfig::load_from_static(), None),
    }
}

/// Messages for the configured locale plus the page's overrides.
pub fn load_messages(config: &A11yConfig) -> Messages {
    let overrides = json_block(MESSAGES_OVERRIDE_ELEMENT_ID);
    Messages::for_lang_with_overrides(&config.locale, overrides.as_deref())
        .or_else(|err| {
            log::warn!("messages: {err}");
            Messages::for_lang(&config.locale)
        })
        .unwrap_or_default()
}

/// Build the controller, restore stored preferences and start listening.
///
/// # Errors
/// Returns an error if the mouse-move listener cannot be registered.
pub fn install(config: A11yConfig, messages: Messages) -> Result<(), JsValue> {
    let mut controller = A11yController::new(config, messages, BrowserPage, BrowserTimers);
    controller.initialize();
    CONTROLLER.with(|cell| *cell.borrow_mut() = Some(controller));

    if let Some(doc) = dom::document() {
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
            with_controller(|ctrl| ctrl.on_pointer_move(x, y));
        });
        doc.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }
    expose_globals()
}

#[wasm_bindgen(js_name = alterarFonte)]
pub fn change_font(delta: f64) {
    with_controller(|ctrl| ctrl.adjust_font(delta));
}

#[wasm_bindgen(js_name = resetarFonte)]
pub fn reset_font() {
    with_controller(BrowserController::reset_font);
}

#[wasm_bindgen(js_name = alternarContraste)]
pub fn toggle_contrast() {
    with_controller(BrowserController::toggle_contrast);
}

#[wasm_bindgen(js_name = alternarModoDark)]
pub fn toggle_dark_mode() {
    with_controller(BrowserController::toggle_dark_mode);
}

#[wasm_bindgen(js_name = toggleLeitura)]
pub fn toggle_read_aloud() {
    with_controller(BrowserController::toggle_read_aloud);
}

/// Current toolbar state as a plain JS object, e.g. to sync `aria-pressed`.
#[wasm_bindgen(js_name = estadoAcessibilidade)]
pub fn state_snapshot() -> JsValue {
    with_controller(|ctrl| ctrl.snapshot())
        .and_then(|snapshot| serde_wasm_bindgen::to_value(&snapshot).ok())
        .unwrap_or(JsValue::NULL)
}

fn set_global(win: &web_sys::Window, name: &str, function: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(win, &JsValue::from_str(name), function).map(|_| ())
}

/// Publish the operations on `window` under the names the site's buttons use.
fn expose_globals() -> Result<(), JsValue> {
    let Some(win) = dom::window() else {
        return Ok(());
    };
    let change = Closure::<dyn Fn(f64)>::new(change_font).into_js_value();
    set_global(&win, "alterarFonte", &change)?;

    let nullary: [(&str, fn()); 4] = [
        ("resetarFonte", reset_font),
        ("alternarContraste", toggle_contrast),
        ("alternarModoDark", toggle_dark_mode),
        ("toggleLeitura", toggle_read_aloud),
    ];
    for (name, op) in nullary {
        let function = Closure::<dyn Fn()>::new(op).into_js_value();
        set_global(&win, name, &function)?;
    }
    Ok(())
}
