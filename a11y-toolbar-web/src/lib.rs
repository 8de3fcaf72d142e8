#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod logger;
pub mod menu;
pub mod page;
pub mod timers;
pub mod toolbar;

/// Set up logging, the menu fixes and the accessibility toolbar.
///
/// # Errors
/// Returns an error if a document-level listener cannot be registered.
pub fn boot() -> Result<(), wasm_bindgen::JsValue> {
    let (config, config_error) = toolbar::load_config();
    logger::init(logger::parse_level(&config.log_level));
    if let Some(err) = config_error {
        log::warn!("page configuration ignored: {err}");
    }

    menu::install(config.desktop_breakpoint_px)?;
    let messages = toolbar::load_messages(&config);
    toolbar::install(config, messages)
}

#[cfg(target_arch = "wasm32")]
fn boot_logged() {
    if let Err(err) = boot() {
        log::error!("accessibility toolbar failed to start: {}", dom::js_error_message(&err));
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let Some(doc) = dom::document() else {
        return Ok(());
    };
    if doc.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(boot_logged);
        doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        boot_logged();
    }
    Ok(())
}
