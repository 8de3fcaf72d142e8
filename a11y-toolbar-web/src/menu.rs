//! Navigation submenu fixes
//!
//! Clears inline size limits on every submenu and, on desktop widths, keeps
//! one `mouseenter` listener per parent item that pulls an overflowing
//! submenu back inside the viewport. Both passes re-run on resize.
use crate::dom;
use a11y_toolbar_core::constants::{
    MENU_PARENT_ITEM_SELECTOR, MENU_SUBMENU_SELECTOR, SUBMENU_SELECTOR,
};
use a11y_toolbar_core::menu::{HoverAction, UNCLAMPED_SUBMENU_STYLE, hover_action, is_desktop};
use std::cell::{Cell, RefCell};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement};

/// A bound hover listener; unbinds itself when dropped.
struct HoverBinding {
    item: Element,
    listener: Closure<dyn FnMut(Event)>,
}

impl Drop for HoverBinding {
    fn drop(&mut self) {
        dom::log_js_error(
            "unbind mouseenter",
            self.item.remove_event_listener_with_callback(
                "mouseenter",
                self.listener.as_ref().unchecked_ref(),
            ),
        );
    }
}

thread_local! {
    static HOVER_BINDINGS: RefCell<Vec<HoverBinding>> = const { RefCell::new(Vec::new()) };
    static BREAKPOINT_PX: Cell<f64> = const { Cell::new(a11y_toolbar_core::constants::DEFAULT_DESKTOP_BREAKPOINT_PX) };
}

fn apply_styles(el: &HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in styles {
        dom::log_js_error("submenu style", style.set_property(name, value));
    }
}

/// Force every submenu to show its full content. Idempotent.
pub fn fix_submenu_overflow() {
    let Some(doc) = dom::document() else {
        return;
    };
    let Ok(submenus) = doc.query_selector_all(MENU_SUBMENU_SELECTOR) else {
        return;
    };
    for idx in 0..submenus.length() {
        if let Some(submenu) = submenus
            .get(idx)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            apply_styles(&submenu, &UNCLAMPED_SUBMENU_STYLE);
        }
    }
}

fn reposition_if_overflowing(submenu: &HtmlElement) {
    let Some(viewport) = dom::viewport_width() else {
        return;
    };
    let rect = submenu.get_bounding_client_rect();
    let action = hover_action(rect.right(), viewport);
    if action == HoverAction::AnchorRight {
        log::debug!("submenu overflows viewport ({} > {viewport})", rect.right());
    }
    apply_styles(submenu, action.styles());
}

fn bind_hover(item: Element, submenu: HtmlElement) -> Result<HoverBinding, JsValue> {
    let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        reposition_if_overflowing(&submenu);
    });
    item.add_event_listener_with_callback("mouseenter", listener.as_ref().unchecked_ref())?;
    Ok(HoverBinding { item, listener })
}

/// Drop the previous pass's listeners and, on desktop widths, bind one
/// listener per parent item that has a submenu.
pub fn enhance_desktop_menus() {
    HOVER_BINDINGS.with(|cell| cell.borrow_mut().clear());

    let breakpoint = BREAKPOINT_PX.with(Cell::get);
    let Some(viewport) = dom::viewport_width() else {
        return;
    };
    if !is_desktop(viewport, breakpoint) {
        return;
    }
    let Some(doc) = dom::document() else {
        return;
    };
    let Ok(items) = doc.query_selector_all(MENU_PARENT_ITEM_SELECTOR) else {
        return;
    };

    let mut bindings = Vec::new();
    for idx in 0..items.length() {
        let Some(item) = items
            .get(idx)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(submenu) = item
            .query_selector(SUBMENU_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        match bind_hover(item, submenu) {
            Ok(binding) => bindings.push(binding),
            Err(err) => log::warn!("mouseenter: {}", dom::js_error_message(&err)),
        }
    }
    log::debug!("bound {} submenu hover listeners", bindings.len());
    HOVER_BINDINGS.with(|cell| *cell.borrow_mut() = bindings);
}

/// Number of hover listeners currently bound.
#[must_use]
pub fn bound_hover_listeners() -> usize {
    HOVER_BINDINGS.with(|cell| cell.borrow().len())
}

/// Run both passes now and again on every resize.
///
/// # Errors
/// Returns an error if the resize listener cannot be registered.
pub fn install(breakpoint_px: f64) -> Result<(), JsValue> {
    BREAKPOINT_PX.with(|cell| cell.set(breakpoint_px));
    fix_submenu_overflow();
    enhance_desktop_menus();

    let Some(win) = dom::window() else {
        return Ok(());
    };
    let on_resize = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        fix_submenu_overflow();
        enhance_desktop_menus();
    });
    win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}
