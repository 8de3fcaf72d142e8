//! `window.setTimeout` behind the core `TimerHost` seam
use crate::dom;
use a11y_toolbar_core::TimerHost;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// A scheduled timeout. Owns its callback, so dropping the handle after the
/// timer fired or was cleared releases the closure.
pub struct BrowserTimeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = BrowserTimeout;

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<BrowserTimeout> {
        let win = dom::window()?;
        let mut task = Some(task);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(task) = task.take() {
                task();
            }
        });
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match win.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(id) => Some(BrowserTimeout {
                id,
                _callback: callback,
            }),
            Err(err) => {
                log::warn!("setTimeout: {}", dom::js_error_message(&err));
                None
            }
        }
    }

    fn clear_timeout(&self, handle: BrowserTimeout) {
        if let Some(win) = dom::window() {
            win.clear_timeout_with_handle(handle.id);
        }
    }
}
