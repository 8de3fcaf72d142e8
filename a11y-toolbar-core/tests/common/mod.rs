#![allow(dead_code)]

use a11y_toolbar_core::{A11yConfig, A11yController, Messages, Page, TimerHost};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

#[derive(Default)]
pub struct PageLog {
    pub body_font_px: Option<f64>,
    pub style: Option<String>,
    pub body_classes: BTreeSet<String>,
    pub cookies: BTreeMap<String, String>,
    pub cookie_writes: Vec<String>,
    pub toast: Option<String>,
    pub toast_visible: bool,
    pub toast_fades: usize,
    pub text_under_pointer: Option<String>,
    pub speech_available: bool,
    pub spoken: Vec<(String, String)>,
    pub speech_cancels: usize,
    pub now_ms: f64,
}

/// In-memory page recording everything the controller does to it.
#[derive(Clone, Default)]
pub struct FakePage(pub Rc<RefCell<PageLog>>);

impl FakePage {
    pub fn with_body_font(px: f64) -> Self {
        let page = Self::default();
        page.0.borrow_mut().body_font_px = Some(px);
        page.0.borrow_mut().speech_available = true;
        page
    }

    pub fn log(&self) -> std::cell::Ref<'_, PageLog> {
        self.0.borrow()
    }

    pub fn log_mut(&self) -> std::cell::RefMut<'_, PageLog> {
        self.0.borrow_mut()
    }
}

impl Page for FakePage {
    fn body_font_size_px(&self) -> Option<f64> {
        self.0.borrow().body_font_px
    }

    fn ensure_style(&self) {
        self.0.borrow_mut().style.get_or_insert_with(String::new);
    }

    fn set_style_text(&self, css: &str) {
        self.0.borrow_mut().style = Some(css.to_string());
    }

    fn remove_style(&self) {
        self.0.borrow_mut().style = None;
    }

    fn set_body_class(&self, class: &str, enabled: bool) {
        let mut log = self.0.borrow_mut();
        if enabled {
            log.body_classes.insert(class.to_string());
        } else {
            log.body_classes.remove(class);
        }
    }

    fn cookie_header(&self) -> String {
        self.0
            .borrow()
            .cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write_cookie(&self, cookie: &str) {
        let mut log = self.0.borrow_mut();
        log.cookie_writes.push(cookie.to_string());
        let pair = cookie.split(';').next().unwrap_or_default();
        if let Some((name, value)) = pair.split_once('=') {
            log.cookies.insert(name.to_string(), value.to_string());
        }
    }

    fn show_toast(&self, message: &str) {
        let mut log = self.0.borrow_mut();
        log.toast = Some(message.to_string());
        log.toast_visible = true;
    }

    fn fade_toast(&self) {
        let mut log = self.0.borrow_mut();
        log.toast_visible = false;
        log.toast_fades += 1;
    }

    fn text_at_point(&self, _x: f64, _y: f64) -> Option<String> {
        self.0.borrow().text_under_pointer.clone()
    }

    fn speech_available(&self) -> bool {
        self.0.borrow().speech_available
    }

    fn speak(&self, text: &str, lang: &str) {
        self.0
            .borrow_mut()
            .spoken
            .push((text.to_string(), lang.to_string()));
    }

    fn cancel_speech(&self) {
        self.0.borrow_mut().speech_cancels += 1;
    }

    fn now_ms(&self) -> f64 {
        self.0.borrow().now_ms
    }
}

struct Pending {
    id: u32,
    due_ms: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
pub struct TimerQueue {
    now_ms: Cell<u64>,
    next_id: Cell<u32>,
    pending: RefCell<Vec<Pending>>,
}

/// Virtual-clock timers advanced explicitly by the test.
#[derive(Clone, Default)]
pub struct ManualTimers(pub Rc<TimerQueue>);

impl ManualTimers {
    pub fn pending(&self) -> usize {
        self.0.pending.borrow().len()
    }

    /// Move the clock forward, running every task that comes due in order.
    pub fn advance(&self, ms: u64) {
        let target = self.0.now_ms.get() + ms;
        loop {
            let next = {
                let mut pending = self.0.pending.borrow_mut();
                let due = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due_ms <= target)
                    .min_by_key(|(_, p)| (p.due_ms, p.id))
                    .map(|(idx, _)| idx);
                due.map(|idx| pending.remove(idx))
            };
            let Some(task) = next else {
                break;
            };
            self.0.now_ms.set(task.due_ms);
            (task.task)();
        }
        self.0.now_ms.set(target);
    }
}

impl TimerHost for ManualTimers {
    type Handle = u32;

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<u32> {
        let id = self.0.next_id.get();
        self.0.next_id.set(id + 1);
        self.0.pending.borrow_mut().push(Pending {
            id,
            due_ms: self.0.now_ms.get() + u64::from(delay_ms),
            task,
        });
        Some(id)
    }

    fn clear_timeout(&self, handle: u32) {
        self.0.pending.borrow_mut().retain(|p| p.id != handle);
    }
}

pub type TestController = A11yController<FakePage, ManualTimers>;

pub fn controller_on(page: &FakePage, timers: &ManualTimers) -> TestController {
    A11yController::new(
        A11yConfig::default(),
        Messages::default(),
        page.clone(),
        timers.clone(),
    )
}
